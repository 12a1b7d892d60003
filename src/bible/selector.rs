//! Day-to-chapter selection.
//!
//! Proverbs has 31 chapters, one per day of the month. Short months would
//! never reach the tail chapters, so on the last day of a month shorter than
//! 31 days every remaining chapter is shown at once.

use chrono::{Datelike, NaiveDate};

use crate::constants::reading::LAST_CHAPTER;

/// Number of days in the month containing `date`.
///
/// Falls back to 31 if the first day of the following month is not
/// representable (only possible at the very end of chrono's date range).
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(LAST_CHAPTER, |last| last.day())
}

/// Chapters to show on `today`, in ascending order.
///
/// Returns `[day]`, except on the last day of a month shorter than 31 days,
/// where it returns `day..=31`. Never empty.
pub fn select_chapters(today: NaiveDate) -> Vec<u32> {
    let day = today.day();

    if day == days_in_month(today) && day < LAST_CHAPTER {
        (day..=LAST_CHAPTER).collect()
    } else {
        vec![day]
    }
}
