// Locale tables for month and weekday labels
// Labels only; date arithmetic never depends on the locale

/// Month and weekday display names for one locale tag.
///
/// Weekday names are stored Sunday-first and rotated by the configured
/// week-start offset when rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    month_names: [&'static str; 12],
    weekday_short: [&'static str; 7],
}

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];
const EN_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DE_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];
const DE_WEEKDAYS: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];

const FR_MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];
const FR_WEEKDAYS: [&str; 7] = ["dim", "lun", "mar", "mer", "jeu", "ven", "sam"];

impl Locale {
    /// Look up a locale by tag. Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.split(['-', '_']).next().unwrap_or("en") {
            "de" => Self {
                tag: "de",
                month_names: DE_MONTHS,
                weekday_short: DE_WEEKDAYS,
            },
            "fr" => Self {
                tag: "fr",
                month_names: FR_MONTHS,
                weekday_short: FR_WEEKDAYS,
            },
            _ => Self::default(),
        }
    }

    /// Full month name, `month` is 1..=12.
    pub fn month_name(&self, month: u32) -> &'static str {
        self.month_names[(month as usize - 1).min(11)]
    }

    /// Short weekday names starting from the given week-start offset
    /// (0=Sunday..6=Saturday).
    pub fn weekday_names(&self, week_starts_on: u8) -> Vec<&'static str> {
        let start = week_starts_on as usize % 7;
        (0..7).map(|i| self.weekday_short[(start + i) % 7]).collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            tag: "en",
            month_names: EN_MONTHS,
            weekday_short: EN_WEEKDAYS,
        }
    }
}
