//! Profile import and export.
//!
//! This module is the JSON document boundary for a single profile. Export
//! is a direct serialization of the profile record; import parses and
//! validates a document in full before touching anything, then replaces
//! the target profile's salary terms, off-day schedule, and ledgers while
//! preserving its identity. A rejected document leaves the profile
//! untouched.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{MonthlyData, Profile};

/// A parsed profile document awaiting import.
///
/// `id`, `name`, and `monthlyData` are required; salary terms and the
/// off-day schedule default when absent. The source `id` and `name` are
/// parsed but deliberately never applied: import merges data into an
/// existing profile rather than creating one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    /// Source profile id (checked for presence, not applied).
    pub id: String,
    /// Source profile name (checked for presence, not applied).
    pub name: String,
    /// Salary for a full month of working days.
    #[serde(default)]
    pub monthly_salary: Decimal,
    /// Explicit hourly overtime rate, if set.
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// Weekday indices scheduled off.
    #[serde(default)]
    pub weekly_off_days: BTreeSet<u8>,
    /// Monthly ledgers keyed by `"YYYY-MM"`.
    pub monthly_data: HashMap<String, MonthlyData>,
}

impl ProfileDocument {
    fn validate(&self) -> TrackerResult<()> {
        let reject = |message: String| TrackerError::ImportRejected { message };

        if self.monthly_salary < Decimal::ZERO {
            return Err(reject("monthlySalary cannot be negative".to_string()));
        }
        if let Some(rate) = self.overtime_rate {
            if rate < Decimal::ZERO {
                return Err(reject("overtimeRate cannot be negative".to_string()));
            }
        }
        if self.weekly_off_days.len() > 2 {
            return Err(reject(format!(
                "weeklyOffDays holds {} days, at most 2 allowed",
                self.weekly_off_days.len()
            )));
        }
        if let Some(day) = self.weekly_off_days.iter().find(|d| **d > 6) {
            return Err(reject(format!(
                "weeklyOffDays contains {day}, weekday indices run 0..=6"
            )));
        }

        for (month_key, ledger) in &self.monthly_data {
            if ledger.paid_amount < Decimal::ZERO {
                return Err(reject(format!(
                    "paidAmount for {month_key} cannot be negative"
                )));
            }
            for (date_key, record) in &ledger.attendance {
                if record.overtime < Decimal::ZERO {
                    return Err(reject(format!(
                        "overtime for {date_key} cannot be negative"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Parses and validates a profile document.
///
/// Any parse failure or validation violation is an
/// [`TrackerError::ImportRejected`]; nothing is mutated on either path.
///
/// # Example
///
/// ```
/// use attendance_tracker::transfer::parse_profile_document;
///
/// let doc = parse_profile_document(
///     r#"{"id": "p1", "name": "Crew", "monthlyData": {}}"#,
/// ).unwrap();
/// assert_eq!(doc.name, "Crew");
///
/// assert!(parse_profile_document("{}").is_err());
/// ```
pub fn parse_profile_document(json: &str) -> TrackerResult<ProfileDocument> {
    let document: ProfileDocument =
        serde_json::from_str(json).map_err(|err| TrackerError::ImportRejected {
            message: err.to_string(),
        })?;
    document.validate()?;
    Ok(document)
}

/// Replaces a profile's terms and ledgers with the document's contents.
///
/// The target profile keeps its own id and name: import is a
/// merge-by-replacement into the receiving profile, not a profile
/// creation.
pub fn apply_import(profile: &mut Profile, document: ProfileDocument) {
    profile.monthly_salary = document.monthly_salary;
    profile.overtime_rate = document.overtime_rate;
    profile.weekly_off_days = document.weekly_off_days;
    profile.monthly_data = document.monthly_data;
}

/// Serializes a profile to its export document.
pub fn export_profile(profile: &Profile) -> Value {
    serde_json::to_value(profile).expect("profile serialization is infallible")
}

/// Builds a download filename embedding the profile name and export date.
///
/// The name is sanitized to filesystem-safe characters; the date makes
/// repeated exports traceable.
///
/// # Example
///
/// ```
/// use attendance_tracker::transfer::export_filename;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
/// assert_eq!(
///     export_filename("Site crew!", date),
///     "site_crew__2026-08-05.json"
/// );
/// ```
pub fn export_filename(name: &str, date: NaiveDate) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_{}.json", sanitized, date.format("%Y-%m-%d"))
}
