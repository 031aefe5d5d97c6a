// Property-based tests for month grid layout
// Every month, under every week-start offset, fills exactly 42 slots

use proptest::prelude::*;

use range_calendar::models::selection::ViewMonth;
use range_calendar::utils::date::days_in_month;
use range_calendar::widgets::calendar_grid::{month_slots, GRID_CELLS};

proptest! {
    /// Property: the grid always has exactly 42 slots, of which exactly
    /// `days_in_month` are day cells.
    #[test]
    fn prop_grid_shape(
        year in 1970..2100i32,
        month in 1..=12u32,
        week_starts_on in 0..=6u8,
    ) {
        let slots = month_slots(ViewMonth::new(year, month), week_starts_on);
        prop_assert_eq!(slots.len(), GRID_CELLS);
        prop_assert_eq!(
            slots.iter().flatten().count(),
            days_in_month(year, month) as usize
        );
    }

    /// Property: day cells form one contiguous run, so placeholders only
    /// ever pad the front and the back.
    #[test]
    fn prop_day_cells_are_contiguous(
        year in 1970..2100i32,
        month in 1..=12u32,
        week_starts_on in 0..=6u8,
    ) {
        let slots = month_slots(ViewMonth::new(year, month), week_starts_on);
        let first = slots.iter().position(Option::is_some).unwrap();
        let last = slots.iter().rposition(Option::is_some).unwrap();
        prop_assert!(slots[first..=last].iter().all(Option::is_some));
        prop_assert!(last - first + 1 == days_in_month(year, month) as usize);
    }

    /// Property: the first day cell always lands in the first week row, and
    /// its column matches the month's first weekday adjusted by the offset.
    #[test]
    fn prop_leading_placeholder_count(
        year in 1970..2100i32,
        month in 1..=12u32,
        week_starts_on in 0..=6u8,
    ) {
        use range_calendar::utils::date::first_weekday_of_month;

        let slots = month_slots(ViewMonth::new(year, month), week_starts_on);
        let leading = slots.iter().position(Option::is_some).unwrap();
        let expected = ((first_weekday_of_month(year, month) as i32
            - week_starts_on as i32) + 7) % 7;
        prop_assert_eq!(leading as i32, expected);
        prop_assert!(leading < 7);
    }
}
