// Settings loading tests

use std::io::Write;

use range_calendar::models::settings::PickerSettings;

#[test]
fn test_load_full_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
theme = "dark"
first_day_of_week = 1
locale = "de"
mobile_breakpoint = 480.0
"#
    )
    .unwrap();

    let settings = PickerSettings::load(file.path()).unwrap();
    assert_eq!(settings.theme, "dark");
    assert_eq!(settings.first_day_of_week, 1);
    assert_eq!(settings.locale, "de");
    assert_eq!(settings.mobile_breakpoint, 480.0);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "locale = \"fr\"").unwrap();

    let settings = PickerSettings::load(file.path()).unwrap();
    assert_eq!(settings.locale, "fr");
    assert_eq!(settings.theme, PickerSettings::default().theme);
    assert_eq!(
        settings.first_day_of_week,
        PickerSettings::default().first_day_of_week
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_day_of_week = 9").unwrap();
    assert!(PickerSettings::load(file.path()).is_err());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "theme = [unclosed").unwrap();
    assert!(PickerSettings::load(file.path()).is_err());
}
