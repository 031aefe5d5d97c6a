// Range selection protocol tests
// Scenario coverage for the two-click protocol, swap rule and previews

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;

use range_calendar::models::selection::{SelectionRange, ViewMonth};
use range_calendar::widgets::range_picker::{RangeSelectionController, SelectionPhase};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fresh() -> RangeSelectionController {
    RangeSelectionController::new(SelectionRange::empty(), date(2024, 3, 1))
}

#[test]
fn test_click_then_earlier_click_commits_swapped() {
    let mut controller = fresh();
    controller.click(date(2024, 3, 15));
    assert_eq!(controller.phase(), SelectionPhase::HasStart);
    assert_eq!(controller.tentative().from, Some(date(2024, 3, 15)));
    assert_eq!(controller.tentative().to, None);

    controller.click(date(2024, 3, 10));
    let committed = controller.commit();
    assert_eq!(committed.from, Some(date(2024, 3, 10)));
    assert_eq!(committed.to, Some(date(2024, 3, 15)));
}

#[test_case(date(2024, 3, 15), date(2024, 3, 20), date(2024, 3, 15), date(2024, 3, 20); "forward selection keeps order")]
#[test_case(date(2024, 3, 15), date(2024, 3, 10), date(2024, 3, 10), date(2024, 3, 15); "backward selection swaps")]
#[test_case(date(2024, 3, 15), date(2024, 3, 15), date(2024, 3, 15), date(2024, 3, 15); "same day collapses")]
#[test_case(date(2024, 12, 28), date(2025, 1, 3), date(2024, 12, 28), date(2025, 1, 3); "selection across a year boundary")]
fn test_two_click_commit(
    first: NaiveDate,
    second: NaiveDate,
    expect_from: NaiveDate,
    expect_to: NaiveDate,
) {
    let mut controller = fresh();
    controller.click(first);
    controller.click(second);
    let committed = controller.commit();
    assert_eq!(committed.from, Some(expect_from));
    assert_eq!(committed.to, Some(expect_to));
}

#[test]
fn test_hover_preview_has_exact_span() {
    let mut controller = fresh();
    controller.click(date(2024, 3, 15));
    controller.hover(Some(date(2024, 3, 20)));

    let days = controller.highlighted_days();
    assert_eq!(
        days,
        (15..=20)
            .map(|d| date(2024, 3, d))
            .collect::<Vec<NaiveDate>>()
    );
}

#[test]
fn test_pane_seeding_follows_the_start_click() {
    let mut controller = fresh();
    controller.click(date(2024, 11, 30));
    assert_eq!(controller.left_month(), ViewMonth::new(2024, 11));
    assert_eq!(controller.right_month(), ViewMonth::new(2024, 12));

    // Completing the range does not reseed
    controller.click(date(2024, 12, 5));
    assert_eq!(controller.left_month(), ViewMonth::new(2024, 11));

    // Starting over does
    controller.click(date(2025, 2, 1));
    assert_eq!(controller.left_month(), ViewMonth::new(2025, 2));
    assert_eq!(controller.right_month(), ViewMonth::new(2025, 3));
}

#[test]
fn test_cancel_discards_tentative_edits() {
    let committed = SelectionRange {
        from: Some(date(2024, 3, 10)),
        to: Some(date(2024, 3, 15)),
    };
    let mut controller = RangeSelectionController::new(committed, date(2024, 3, 1));

    controller.click(date(2024, 8, 1));
    controller.hover(Some(date(2024, 8, 9)));
    controller.cancel();

    assert_eq!(controller.tentative(), committed);
    assert_eq!(controller.preview(), None);
}

proptest! {
    /// Swap law: whatever order the two clicks arrive in, the committed
    /// range satisfies from <= to.
    #[test]
    fn prop_committed_range_is_ordered(
        a in 0..20000i64,
        b in 0..20000i64,
    ) {
        let epoch = date(1970, 1, 1);
        let first = epoch + chrono::Duration::days(a);
        let second = epoch + chrono::Duration::days(b);

        let mut controller = fresh();
        controller.click(first);
        controller.click(second);
        let committed = controller.commit();

        prop_assert_eq!(committed.from, Some(first.min(second)));
        prop_assert_eq!(committed.to, Some(first.max(second)));
        prop_assert!(committed.from <= committed.to);
    }

    /// Idempotence: committing again without edits yields the same value.
    #[test]
    fn prop_commit_is_idempotent(a in 0..20000i64, b in 0..20000i64) {
        let epoch = date(1970, 1, 1);
        let mut controller = fresh();
        controller.click(epoch + chrono::Duration::days(a));
        controller.click(epoch + chrono::Duration::days(b));

        let first = controller.commit();
        let second = controller.commit();
        prop_assert_eq!(first, second);
    }

    /// The preview span always covers exactly |hover - start| + 1 days.
    #[test]
    fn prop_preview_length(start in 0..20000i64, hover in 0..20000i64) {
        let epoch = date(1970, 1, 1);
        let start = epoch + chrono::Duration::days(start);
        let hover = epoch + chrono::Duration::days(hover);

        let mut controller = fresh();
        controller.click(start);
        controller.hover(Some(hover));

        let days = controller.highlighted_days();
        let expected = (hover - start).num_days().unsigned_abs() as usize + 1;
        prop_assert_eq!(days.len(), expected);
    }
}
