// Selection model
// View months, tentative/committed ranges, and disabled-date bounds

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

/// The (year, month) a calendar pane is currently displaying, independent of
/// what is selected. Ordering is by (year, month).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ViewMonth {
    pub year: i32,
    pub month: u32,
}

impl ViewMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First calendar day of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("ViewMonth month is always 1..=12")
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Whether the given date falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Signed whole months from `other` to `self`.
    pub fn months_between(&self, other: &Self) -> i32 {
        (self.year - other.year) * 12 + self.month as i32 - other.month as i32
    }
}

/// A tentative or committed date range.
///
/// When both endpoints are set, `from <= to` holds; the selection controller
/// enforces this by swapping at commit time rather than rejecting input.
/// Only `from` set means the range is still open; both `None` is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SelectionRange {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A range collapsed to one day.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            from: Some(day),
            to: Some(day),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn is_open(&self) -> bool {
        self.from.is_some() && self.to.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Every day of the range, inclusive on both ends.
    ///
    /// Linear in the range length and recomputed per render; realistic UI
    /// ranges are days to a few months, so no caching is done.
    pub fn days(&self) -> Vec<NaiveDate> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => enumerate_days(from, to),
            _ => Vec::new(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            (Some(from), None) => from == date,
            _ => false,
        }
    }
}

/// Enumerate every day from `from` to `to` inclusive, in order.
/// Endpoints in either order are accepted.
pub fn enumerate_days(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    let mut days = Vec::with_capacity((hi - lo).num_days() as usize + 1);
    let mut day = lo;
    while day <= hi {
        days.push(day);
        day = day.succ_opt().expect("date range stays in bounds");
    }
    days
}

/// The union of a minimum bound, a maximum bound, and explicitly disabled
/// dates. Bounds carry the host's time-of-day and offset; comparisons are
/// UTC-normalized per calendar day (see `utils::date::is_disabled`).
///
/// `min > max` is not validated; behavior in that case is undefined.
#[derive(Clone, Debug, Default)]
pub struct DisabledDates {
    pub min: Option<DateTime<FixedOffset>>,
    pub max: Option<DateTime<FixedOffset>>,
    pub dates: Vec<NaiveDate>,
}
