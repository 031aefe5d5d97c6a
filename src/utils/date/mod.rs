// Date utility functions
// Pure helpers shared by all calendar grid variants

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

use crate::models::selection::DisabledDates;

/// Number of calendar days in the given month.
///
/// Uses the day-1-of-the-next-month trick so leap years come out of the
/// underlying date primitive rather than a hand-rolled table.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("month must be 1..=12");
    let next = NaiveDate::from_ymd_opt(
        if month == 12 { year + 1 } else { year },
        if month == 12 { 1 } else { month + 1 },
        1,
    )
    .expect("month must be 1..=12");
    next.signed_duration_since(first).num_days() as u32
}

/// Weekday index of day 1 of the given month, 0=Sunday..6=Saturday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("month must be 1..=12")
        .weekday()
        .num_days_from_sunday()
}

/// Compare two dates by calendar day only.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// UTC midnight of the bound's local calendar day.
///
/// The bound keeps whatever time-of-day and offset the host supplied; only
/// its local (year, month, day) matters for range checks, so the day is
/// re-anchored at UTC 00:00:00 before comparison.
pub fn utc_start_of_day(dt: DateTime<FixedOffset>) -> DateTime<Utc> {
    dt.date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc()
}

/// UTC 23:59:59 of the bound's local calendar day.
pub fn utc_end_of_day(dt: DateTime<FixedOffset>) -> DateTime<Utc> {
    dt.date_naive()
        .and_hms_opt(23, 59, 59)
        .expect("end of day is always valid")
        .and_utc()
}

/// Whether a calendar day is disabled under the given bounds.
///
/// A day is disabled when its UTC start-of-day precedes the minimum bound's
/// UTC start-of-day, its UTC end-of-day follows the maximum bound's UTC
/// end-of-day, or it matches one of the explicitly disabled dates. Both
/// boundary days are inclusive; absent bounds constrain nothing.
pub fn is_disabled(date: NaiveDate, bounds: &DisabledDates) -> bool {
    if let Some(min) = bounds.min {
        let day_start = date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc();
        if day_start < utc_start_of_day(min) {
            return true;
        }
    }

    if let Some(max) = bounds.max {
        let day_end = date
            .and_hms_opt(23, 59, 59)
            .expect("end of day is always valid")
            .and_utc();
        if day_end > utc_end_of_day(max) {
            return true;
        }
    }

    bounds.dates.iter().any(|d| is_same_day(*d, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month_regular_and_leap() {
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2100, 2), 28); // century non-leap
    }

    #[test]
    fn test_first_weekday_of_month() {
        // 2024-02-01 was a Thursday
        assert_eq!(first_weekday_of_month(2024, 2), 4);
        // 2024-09-01 was a Sunday
        assert_eq!(first_weekday_of_month(2024, 9), 0);
    }

    #[test]
    fn test_is_same_day() {
        assert!(is_same_day(date(2024, 3, 15), date(2024, 3, 15)));
        assert!(!is_same_day(date(2024, 3, 15), date(2024, 3, 16)));
    }

    #[test]
    fn test_min_bound_is_inclusive_across_offsets() {
        // Late-evening minimum in UTC-5 still refers to the same calendar
        // day as an early-morning date in the same offset.
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let min = offset.with_ymd_and_hms(2024, 1, 10, 23, 0, 0).unwrap();
        let bounds = DisabledDates {
            min: Some(min),
            max: None,
            dates: Vec::new(),
        };
        assert!(!is_disabled(date(2024, 1, 10), &bounds));
        assert!(is_disabled(date(2024, 1, 9), &bounds));
        assert!(!is_disabled(date(2024, 1, 11), &bounds));
    }

    #[test]
    fn test_max_bound_is_inclusive() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let max = offset.with_ymd_and_hms(2024, 6, 20, 1, 30, 0).unwrap();
        let bounds = DisabledDates {
            min: None,
            max: Some(max),
            dates: Vec::new(),
        };
        assert!(!is_disabled(date(2024, 6, 20), &bounds));
        assert!(is_disabled(date(2024, 6, 21), &bounds));
    }

    #[test]
    fn test_explicit_disabled_dates() {
        let bounds = DisabledDates {
            min: None,
            max: None,
            dates: vec![date(2024, 3, 15), date(2024, 3, 17)],
        };
        assert!(is_disabled(date(2024, 3, 15), &bounds));
        assert!(!is_disabled(date(2024, 3, 16), &bounds));
        assert!(is_disabled(date(2024, 3, 17), &bounds));
    }

    #[test]
    fn test_absent_bounds_constrain_nothing() {
        let bounds = DisabledDates::default();
        assert!(!is_disabled(date(1900, 1, 1), &bounds));
        assert!(!is_disabled(date(2999, 12, 31), &bounds));
    }
}
