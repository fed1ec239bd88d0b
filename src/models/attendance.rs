//! Attendance status and daily record types.
//!
//! This module defines the AttendanceStatus enum and AttendanceRecord struct
//! for representing a single day's attendance in a profile's ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The attendance outcome recorded for a single calendar day.
///
/// Serialized with the short wire codes used by the profile JSON document:
/// `"P"`, `"A"`, `"H"`, `"HP"`, `"W"`.
///
/// # Example
///
/// ```
/// use attendance_tracker::models::AttendanceStatus;
///
/// let json = serde_json::to_string(&AttendanceStatus::HolidayWorked).unwrap();
/// assert_eq!(json, "\"HP\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Worked a normal day; paid at the daily rate.
    #[serde(rename = "P")]
    Present,
    /// Absent for the day; unpaid.
    #[serde(rename = "A")]
    Absent,
    /// Holiday, not worked; paid at the daily rate.
    #[serde(rename = "H")]
    Holiday,
    /// Holiday, but worked; paid at double the daily rate.
    #[serde(rename = "HP")]
    HolidayWorked,
    /// A scheduled weekly off day. Normally inferred from the profile's
    /// off-day schedule for display, but stored explicitly when the user
    /// attaches overtime to an otherwise unmarked off day.
    #[serde(rename = "W")]
    WeeklyOff,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::Holiday => write!(f, "Holiday"),
            AttendanceStatus::HolidayWorked => write!(f, "Holiday (worked)"),
            AttendanceStatus::WeeklyOff => write!(f, "Weekly off"),
        }
    }
}

/// A single day's entry in a monthly ledger.
///
/// Records exist only for days the user explicitly touched; untouched days
/// have no entry at all. Every record carries a status, and overtime hours
/// are summed into the monthly total regardless of which status they are
/// paired with.
///
/// # Example
///
/// ```
/// use attendance_tracker::models::{AttendanceRecord, AttendanceStatus};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     status: AttendanceStatus::Present,
///     overtime: Decimal::new(15, 1), // 1.5 hours
/// };
/// assert_eq!(record.status, AttendanceStatus::Present);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The attendance outcome for the day.
    pub status: AttendanceStatus,
    /// Overtime hours worked on the day; zero when omitted from a document.
    #[serde(default)]
    pub overtime: Decimal,
}

impl AttendanceRecord {
    /// Creates a record with the given status and no overtime.
    pub fn new(status: AttendanceStatus) -> Self {
        Self {
            status,
            overtime: Decimal::ZERO,
        }
    }
}
