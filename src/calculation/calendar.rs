//! Month and date key derivation.
//!
//! This module provides the [`YearMonth`] value type: a validated
//! `(year, month)` pair with deterministic mappings to the `"YYYY-MM"`
//! month keys that index a profile's ledgers and the `"YYYY-MM-DD"` date
//! keys that index a ledger's attendance map. All arithmetic uses
//! timezone-naive [`NaiveDate`] math, so date identity never shifts with
//! the caller's local timezone.

use chrono::{Datelike, NaiveDate};

/// A calendar month in the proleptic Gregorian calendar.
///
/// Months are 1-indexed (`1 = January .. 12 = December`). Construction is
/// validated, so every held value names a real month and the derivation
/// methods are total.
///
/// # Example
///
/// ```
/// use attendance_tracker::calculation::YearMonth;
///
/// let month = YearMonth::new(2026, 2).unwrap();
/// assert_eq!(month.key(), "2026-02");
/// assert_eq!(month.days(), 28);
///
/// let leap = YearMonth::new(2024, 2).unwrap();
/// assert_eq!(leap.days(), 29);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a validated year-month pair.
    ///
    /// Returns `None` unless the month exists in chrono's supported
    /// calendar range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Returns the month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses a `"YYYY-MM"` month key.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_tracker::calculation::YearMonth;
    ///
    /// let month = YearMonth::parse_key("2026-02").unwrap();
    /// assert_eq!(month.year(), 2026);
    /// assert_eq!(month.month(), 2);
    /// assert!(YearMonth::parse_key("2026-13").is_none());
    /// assert!(YearMonth::parse_key("not-a-key").is_none());
    /// ```
    pub fn parse_key(key: &str) -> Option<Self> {
        let (year, month) = key.split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        Self::new(year, month)
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 1-indexed month component.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The `"YYYY-MM"` month key used to index a profile's ledgers.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// The first calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Infallible: the pair was validated at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated year-month")
    }

    /// The number of calendar days in the month, accounting for leap years.
    pub fn days(&self) -> u32 {
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .expect("validated year-month");
        (next - self.first_day()).num_days() as u32
    }

    /// Iterates the month's calendar days in order.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_tracker::calculation::YearMonth;
    ///
    /// let month = YearMonth::new(2026, 2).unwrap();
    /// let dates: Vec<_> = month.dates().collect();
    /// assert_eq!(dates.len(), 28);
    /// assert_eq!(dates[0].to_string(), "2026-02-01");
    /// assert_eq!(dates[27].to_string(), "2026-02-28");
    /// ```
    pub fn dates(self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first_day();
        (0..self.days()).map(move |offset| first + chrono::Duration::days(offset as i64))
    }

    /// The `"YYYY-MM-DD"` date key for a calendar date.
    pub fn date_key(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_month_zero_and_thirteen() {
        assert!(YearMonth::new(2026, 0).is_none());
        assert!(YearMonth::new(2026, 13).is_none());
        assert!(YearMonth::new(2026, 12).is_some());
    }

    #[test]
    fn test_month_key_is_zero_padded() {
        let month = YearMonth::new(2026, 3).unwrap();
        assert_eq!(month.key(), "2026-03");

        let month = YearMonth::new(2026, 11).unwrap();
        assert_eq!(month.key(), "2026-11");
    }

    #[test]
    fn test_parse_key_round_trips() {
        for key in ["2026-01", "2024-02", "1999-12"] {
            let month = YearMonth::parse_key(key).unwrap();
            assert_eq!(month.key(), key);
        }
    }

    #[test]
    fn test_parse_key_rejects_malformed_input() {
        assert!(YearMonth::parse_key("2026").is_none());
        assert!(YearMonth::parse_key("2026-00").is_none());
        assert!(YearMonth::parse_key("2026-13").is_none());
        assert!(YearMonth::parse_key("abcd-ef").is_none());
        assert!(YearMonth::parse_key("").is_none());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(YearMonth::new(2026, 1).unwrap().days(), 31);
        assert_eq!(YearMonth::new(2026, 4).unwrap().days(), 30);
        assert_eq!(YearMonth::new(2026, 12).unwrap().days(), 31);
    }

    #[test]
    fn test_february_leap_year_handling() {
        assert_eq!(YearMonth::new(2026, 2).unwrap().days(), 28);
        assert_eq!(YearMonth::new(2024, 2).unwrap().days(), 29);
        assert_eq!(YearMonth::new(2000, 2).unwrap().days(), 29);
        // Century years not divisible by 400 are not leap years.
        assert_eq!(YearMonth::new(1900, 2).unwrap().days(), 28);
    }

    #[test]
    fn test_dates_cover_the_whole_month_in_order() {
        let month = YearMonth::new(2026, 12).unwrap();
        let dates: Vec<_> = month.dates().collect();
        assert_eq!(dates.len(), 31);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(dates[30], NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        for window in dates.windows(2) {
            assert_eq!(window[1] - window[0], chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_date_key_is_iso_formatted() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        assert_eq!(YearMonth::date_key(date), "2026-02-03");
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
        let month = YearMonth::from_date(date);
        assert_eq!(month.key(), "2026-07");
    }

    #[test]
    fn test_date_keys_stable_at_month_boundaries() {
        // The last day of a month and the first of the next never collapse
        // into each other; keys derive from naive calendar dates only.
        let month = YearMonth::new(2026, 1).unwrap();
        let last = month.dates().last().unwrap();
        assert_eq!(YearMonth::date_key(last), "2026-01-31");
        let next = last + chrono::Duration::days(1);
        assert_eq!(YearMonth::date_key(next), "2026-02-01");
    }
}
