//! Profile model.
//!
//! This module defines the Profile struct: an independently configured
//! attendant record carrying salary terms, a weekly-off schedule, and
//! month-indexed attendance ledgers.

use std::collections::{BTreeSet, HashMap};

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MonthlyData;

/// An independently configured worker or job being tracked.
///
/// A profile is the unit of persistence and export. Its ledgers are keyed
/// by `"YYYY-MM"` month keys and created lazily on first write. Weekly off
/// days are weekday indices with `0 = Sunday .. 6 = Saturday`; the settings
/// editor caps the set at two days, the calculation engine accepts any set.
///
/// # Example
///
/// ```
/// use attendance_tracker::models::Profile;
/// use chrono::Weekday;
///
/// let mut profile = Profile::new("Site crew");
/// profile.weekly_off_days.insert(0); // Sundays off
/// assert!(profile.is_weekly_off(Weekday::Sun));
/// assert!(!profile.is_weekly_off(Weekday::Mon));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Salary for a full month of working days.
    #[serde(default)]
    pub monthly_salary: Decimal,
    /// Explicit hourly overtime rate; `None` derives the rate from the
    /// daily rate and an 8-hour standard workday.
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// Weekday indices (`0 = Sunday .. 6 = Saturday`) that are scheduled off.
    #[serde(default)]
    pub weekly_off_days: BTreeSet<u8>,
    /// Monthly ledgers keyed by `"YYYY-MM"`.
    #[serde(default)]
    pub monthly_data: HashMap<String, MonthlyData>,
}

impl Profile {
    /// Creates a fresh profile with a generated id and empty terms.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            monthly_salary: Decimal::ZERO,
            overtime_rate: None,
            weekly_off_days: BTreeSet::new(),
            monthly_data: HashMap::new(),
        }
    }

    /// Returns the ledger for a month key, if one has been written.
    pub fn month(&self, key: &str) -> Option<&MonthlyData> {
        self.monthly_data.get(key)
    }

    /// Returns the ledger for a month key, creating an empty one on first
    /// access.
    pub fn month_mut(&mut self, key: &str) -> &mut MonthlyData {
        self.monthly_data.entry(key.to_string()).or_default()
    }

    /// Returns true when the weekday is in the profile's off-day schedule.
    pub fn is_weekly_off(&self, weekday: Weekday) -> bool {
        self.weekly_off_days
            .contains(&(weekday.num_days_from_sunday() as u8))
    }
}
