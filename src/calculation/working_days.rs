//! Working-day counting.
//!
//! This module determines which calendar days of a month are working days
//! for a profile. Working days are a property of the weekly-off schedule
//! alone; the attendance ledger plays no part here.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::YearMonth;

/// Returns true when the date's weekday is in the off-day set.
///
/// Off days are weekday indices with `0 = Sunday .. 6 = Saturday`.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use attendance_tracker::calculation::is_weekly_off;
/// use chrono::NaiveDate;
///
/// let off_days: BTreeSet<u8> = [0].into_iter().collect();
/// // 2026-02-01 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// assert!(is_weekly_off(sunday, &off_days));
/// assert!(!is_weekly_off(sunday + chrono::Duration::days(1), &off_days));
/// ```
pub fn is_weekly_off(date: NaiveDate, off_days: &BTreeSet<u8>) -> bool {
    off_days.contains(&(date.weekday().num_days_from_sunday() as u8))
}

/// Counts the month's calendar days whose weekday is not scheduled off.
///
/// Independent of the attendance ledger. For every month and off-day set,
/// the working-day count plus the off-day count equals the number of
/// calendar days in the month.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use attendance_tracker::calculation::{YearMonth, count_working_days};
///
/// // February 2026 has 28 days and 4 Sundays.
/// let month = YearMonth::new(2026, 2).unwrap();
/// let off_days: BTreeSet<u8> = [0].into_iter().collect();
/// assert_eq!(count_working_days(month, &off_days), 24);
/// ```
pub fn count_working_days(month: YearMonth, off_days: &BTreeSet<u8>) -> u32 {
    month
        .dates()
        .filter(|date| !is_weekly_off(*date, off_days))
        .count() as u32
}
