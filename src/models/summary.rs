//! Monthly summary model.
//!
//! This module defines the MonthlySummary struct: the derived output of the
//! payroll calculation engine for one profile-month. Summaries are computed
//! on demand and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The derived payroll summary for one profile and one calendar month.
///
/// Day counts tally only explicitly stored records; working days are a
/// property of the profile's schedule alone. `pending_amount` is a signed
/// balance and goes negative on overpayment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Calendar days in the month not scheduled as weekly off.
    pub working_days: u32,
    /// Stored `Present` records.
    pub present_days: u32,
    /// Stored `Absent` records.
    pub absent_days: u32,
    /// Stored `Holiday` records.
    pub holiday_days: u32,
    /// Stored `HolidayWorked` records.
    pub holiday_worked_days: u32,
    /// Stored `WeeklyOff` records (the schedule-derived default is a
    /// display concern and is never counted here).
    pub weekly_off_days: u32,
    /// Overtime hours summed across all stored records.
    pub total_overtime_hours: Decimal,
    /// Monthly salary divided by working days; zero when no working days.
    pub daily_rate: Decimal,
    /// Income from `Present` days.
    pub base_income: Decimal,
    /// Income from `Holiday` days plus double-rate `HolidayWorked` days.
    pub holiday_income: Decimal,
    /// Income from overtime hours.
    pub overtime_income: Decimal,
    /// Sum of base, holiday, and overtime income.
    pub total_income: Decimal,
    /// Amount already paid against the month.
    pub paid_amount: Decimal,
    /// Total income minus paid amount; negative signals overpayment.
    pub pending_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> MonthlySummary {
        MonthlySummary {
            working_days: 24,
            present_days: 20,
            absent_days: 2,
            holiday_days: 1,
            holiday_worked_days: 1,
            weekly_off_days: 0,
            total_overtime_hours: Decimal::new(6, 0),
            daily_rate: Decimal::new(125, 0),
            base_income: Decimal::new(2500, 0),
            holiday_income: Decimal::new(375, 0),
            overtime_income: Decimal::new(9375, 2),
            total_income: Decimal::new(296875, 2),
            paid_amount: Decimal::new(2000, 0),
            pending_amount: Decimal::new(96875, 2),
        }
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let json = serde_json::to_string(&sample_summary()).unwrap();
        assert!(json.contains("\"workingDays\":24"));
        assert!(json.contains("\"presentDays\":20"));
        assert!(json.contains("\"holidayWorkedDays\":1"));
        assert!(json.contains("\"totalOvertimeHours\""));
        assert!(json.contains("\"pendingAmount\""));
    }

    #[test]
    fn test_round_trip() {
        let summary = sample_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: MonthlySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }

    #[test]
    fn test_pending_amount_may_be_negative() {
        let mut summary = sample_summary();
        summary.paid_amount = Decimal::new(5000, 0);
        summary.pending_amount = summary.total_income - summary.paid_amount;
        assert!(summary.pending_amount < Decimal::ZERO);
    }
}
