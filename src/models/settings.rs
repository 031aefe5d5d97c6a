// Picker settings
// Host-facing configuration for the demo app and widget defaults

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration the host supplies to the pickers.
///
/// Loaded from a TOML file by the demo application; library users can
/// construct it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// "light", "dark", or "system"
    pub theme: String,
    /// 0=Sunday..6=Saturday
    pub first_day_of_week: u8,
    /// BCP 47-ish tag, labels only
    pub locale: String,
    /// Viewport width below which popovers fall back to modal centering
    pub mobile_breakpoint: f32,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            first_day_of_week: 0, // Sunday
            locale: "en".to_string(),
            mobile_breakpoint: 600.0,
        }
    }
}

/// Validation failures for host-supplied settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("first_day_of_week must be 0..=6, got {0}")]
    InvalidWeekStart(u8),
    #[error("theme must be \"light\", \"dark\" or \"system\", got {0:?}")]
    UnknownTheme(String),
    #[error("mobile_breakpoint must be positive, got {0}")]
    InvalidBreakpoint(f32),
}

impl PickerSettings {
    /// Check value ranges. Date bounds are the host's responsibility and
    /// are deliberately not validated here.
    pub fn validate(&self) -> std::result::Result<(), SettingsError> {
        if self.first_day_of_week > 6 {
            return Err(SettingsError::InvalidWeekStart(self.first_day_of_week));
        }
        if !matches!(self.theme.as_str(), "light" | "dark" | "system") {
            return Err(SettingsError::UnknownTheme(self.theme.clone()));
        }
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint <= 0.0 {
            return Err(SettingsError::InvalidBreakpoint(self.mobile_breakpoint));
        }
        Ok(())
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .context(format!("Failed to read settings from {}", path.display()))?;
        let settings: Self =
            toml::from_str(&raw).context("Failed to parse settings TOML")?;
        settings.validate().context("Invalid settings values")?;
        Ok(settings)
    }

    /// Load from the platform config directory, falling back to defaults
    /// when the file is absent or unreadable.
    pub fn load_or_default() -> Self {
        let Some(proj_dirs) = ProjectDirs::from("com", "RangeCalendar", "RangeCalendar")
        else {
            return Self::default();
        };
        let path = proj_dirs.config_dir().join("settings.toml");
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(PickerSettings::default().validate().is_ok());
    }

    #[test]
    fn test_week_start_out_of_range() {
        let settings = PickerSettings {
            first_day_of_week: 7,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidWeekStart(7))
        ));
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let settings = PickerSettings {
            theme: "sepia".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::UnknownTheme(_))
        ));
    }
}
