//! Monthly ledger model.
//!
//! This module defines the MonthlyData struct holding one profile's
//! attendance and payment record for a single calendar month.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttendanceRecord;

/// One profile's attendance and payment ledger for one calendar month.
///
/// The attendance map is keyed by ISO date strings (`"YYYY-MM-DD"`) and
/// holds entries only for days the user explicitly touched. A month with no
/// ledger at all reads as the default: empty attendance, nothing paid.
///
/// # Example
///
/// ```
/// use attendance_tracker::models::{AttendanceRecord, AttendanceStatus, MonthlyData};
///
/// let mut ledger = MonthlyData::default();
/// ledger.attendance.insert(
///     "2026-03-02".to_string(),
///     AttendanceRecord::new(AttendanceStatus::Present),
/// );
/// assert_eq!(ledger.attendance.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyData {
    /// Daily records keyed by ISO date string (`"YYYY-MM-DD"`).
    #[serde(default)]
    pub attendance: HashMap<String, AttendanceRecord>,
    /// Amount already paid out against this month's income.
    #[serde(default)]
    pub paid_amount: Decimal,
}

impl MonthlyData {
    /// Returns true if the ledger holds no records and no payment.
    pub fn is_empty(&self) -> bool {
        self.attendance.is_empty() && self.paid_amount == Decimal::ZERO
    }
}
