//! Request types for the attendance tracker API.
//!
//! This module defines the JSON request structures for the editor
//! endpoints. Field names follow the profile document's camelCase wire
//! form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceStatus;
use crate::store::Theme;

/// Request body for `POST /profiles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    /// Display name for the new profile.
    pub name: String,
}

/// Request body for `PUT /profiles/:id/settings`.
///
/// Settings are replaced as a whole; the off-day list is deduplicated
/// into a set on acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    /// Salary for a full month of working days.
    pub monthly_salary: Decimal,
    /// Explicit hourly overtime rate; null leaves the rate derived.
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// Weekday indices (`0 = Sunday .. 6 = Saturday`) scheduled off.
    #[serde(default)]
    pub weekly_off_days: Vec<u8>,
}

/// Request body for `PUT /active-profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivateProfileRequest {
    /// Id of the profile to activate.
    pub id: String,
}

/// Request body for `PUT /attendance/:date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAttendanceRequest {
    /// The attendance outcome for the day. Mandatory: overtime can never
    /// be recorded without a status.
    pub status: AttendanceStatus,
    /// Overtime hours worked on the day.
    #[serde(default)]
    pub overtime: Decimal,
}

/// Request body for `PUT /months/:key/paid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidAmountRequest {
    /// Amount already paid against the month.
    pub paid_amount: Decimal,
}

/// Request body for `PUT /theme`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeRequest {
    /// The theme to persist.
    pub theme: Theme,
}
