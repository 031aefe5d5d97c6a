//! Theme module for the picker widgets
//!
//! Defines the PickerTheme structure with light/dark defaults and
//! system-theme resolution.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// A picker theme defining all colors used by the widgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Popover/panel background color
    pub panel_background: Color32,

    /// Calendar grid background color
    pub grid_background: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Selected day background color
    pub selected_background: Color32,

    /// Selected day text color
    pub selected_text: Color32,

    /// Range-highlight background color
    pub highlight_background: Color32,

    /// Keyboard-focus ring color
    pub focus_ring: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Primary text color (day numbers, month title)
    pub text_primary: Color32,

    /// Secondary text color (weekday header)
    pub text_secondary: Color32,

    /// Disabled day text color
    pub disabled_text: Color32,
}

impl PickerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            panel_background: Color32::from_rgb(255, 255, 255),
            grid_background: Color32::from_rgb(248, 248, 250),
            day_background: Color32::from_rgb(255, 255, 255),
            selected_background: Color32::from_rgb(60, 110, 220),
            selected_text: Color32::from_rgb(255, 255, 255),
            highlight_background: Color32::from_rgb(220, 232, 255),
            focus_ring: Color32::from_rgb(100, 150, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            disabled_text: Color32::from_rgb(180, 180, 180),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            panel_background: Color32::from_rgb(35, 35, 38),
            grid_background: Color32::from_rgb(42, 42, 46),
            day_background: Color32::from_rgb(42, 42, 46),
            selected_background: Color32::from_rgb(90, 140, 255),
            selected_text: Color32::from_rgb(20, 20, 20),
            highlight_background: Color32::from_rgb(55, 70, 105),
            focus_ring: Color32::from_rgb(120, 165, 255),
            day_border: Color32::from_rgb(62, 62, 66),
            text_primary: Color32::from_rgb(235, 235, 235),
            text_secondary: Color32::from_rgb(165, 165, 165),
            disabled_text: Color32::from_rgb(110, 110, 110),
        }
    }

    /// Resolve a theme tag ("light", "dark", "system") to a concrete theme.
    /// "system" consults the OS preference and falls back to light.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }
}
