use egui::Color32;

use super::theme::PickerTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Resolved per-cell colors for one grid render.
#[derive(Clone, Copy)]
pub struct CellPalette {
    pub day_bg: Color32,
    pub placeholder_bg: Color32,
    pub selected_bg: Color32,
    pub selected_text: Color32,
    pub highlight_bg: Color32,
    pub focus_ring: Color32,
    pub border: Color32,
    pub hover_border: Color32,
    pub text: Color32,
    pub header_text: Color32,
    pub disabled_text: Color32,
}

impl CellPalette {
    pub fn from_theme(theme: &PickerTheme) -> Self {
        Self {
            day_bg: theme.day_background,
            placeholder_bg: blend(theme.grid_background, theme.panel_background, 0.5),
            selected_bg: theme.selected_background,
            selected_text: theme.selected_text,
            highlight_bg: theme.highlight_background,
            focus_ring: theme.focus_ring,
            border: theme.day_border,
            hover_border: with_alpha(theme.focus_ring, if theme.is_dark { 160 } else { 120 }),
            text: theme.text_primary,
            header_text: theme.text_secondary,
            disabled_text: theme.disabled_text,
        }
    }
}
