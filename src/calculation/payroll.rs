//! Monthly payroll summary calculation.
//!
//! This module composes working-day counting, attendance tallies, and rate
//! derivation into the monthly summary: income breakdown by category and
//! the payment reconciliation against the amount already paid. The
//! calculation is pure and never mutates its inputs; malformed terms such
//! as a negative salary are the editor's concern and pass through
//! arithmetically.

use rust_decimal::Decimal;

use crate::models::{MonthlyData, MonthlySummary, Profile};

use super::rates::{daily_rate, effective_overtime_rate};
use super::tallies::tally_attendance;
use super::working_days::count_working_days;
use super::YearMonth;

/// Calculates the payroll summary for one profile-month.
///
/// Income derives from the stored ledger and the profile's terms:
/// present days pay the daily rate, holidays pay the daily rate whether
/// worked or not, and a worked holiday pays the daily rate a second time
/// on top. Overtime hours pay the profile's explicit hourly rate, or the
/// daily rate spread over an 8-hour workday when no rate is set. The
/// pending amount is a signed balance; overpayment drives it negative.
///
/// # Example
///
/// ```
/// use attendance_tracker::calculation::{YearMonth, calculate_monthly_summary};
/// use attendance_tracker::models::{
///     AttendanceRecord, AttendanceStatus, MonthlyData, Profile,
/// };
/// use rust_decimal::Decimal;
///
/// let mut profile = Profile::new("Site crew");
/// profile.monthly_salary = Decimal::new(3000, 0);
/// profile.weekly_off_days.insert(0); // Sundays off
///
/// let mut ledger = MonthlyData::default();
/// ledger.attendance.insert(
///     "2026-02-02".to_string(),
///     AttendanceRecord::new(AttendanceStatus::Present),
/// );
///
/// let month = YearMonth::new(2026, 2).unwrap();
/// let summary = calculate_monthly_summary(&profile, &ledger, month);
///
/// // 28 days, 4 Sundays: 24 working days at 125 per day.
/// assert_eq!(summary.working_days, 24);
/// assert_eq!(summary.daily_rate, Decimal::new(125, 0));
/// assert_eq!(summary.base_income, Decimal::new(125, 0));
/// ```
pub fn calculate_monthly_summary(
    profile: &Profile,
    ledger: &MonthlyData,
    month: YearMonth,
) -> MonthlySummary {
    let working_days = count_working_days(month, &profile.weekly_off_days);
    let tallies = tally_attendance(ledger);

    let rate = daily_rate(profile.monthly_salary, working_days);
    let base_income = Decimal::from(tallies.present) * rate;
    // A worked holiday pays twice: once for the holiday entitlement, once
    // for the attendance.
    let holiday_income = Decimal::from(tallies.holiday) * rate
        + Decimal::from(tallies.holiday_worked) * rate * Decimal::TWO;
    let overtime_income =
        tallies.overtime_hours * effective_overtime_rate(profile.overtime_rate, rate);
    let total_income = base_income + holiday_income + overtime_income;

    MonthlySummary {
        working_days,
        present_days: tallies.present,
        absent_days: tallies.absent,
        holiday_days: tallies.holiday,
        holiday_worked_days: tallies.holiday_worked,
        weekly_off_days: tallies.weekly_off,
        total_overtime_hours: tallies.overtime_hours,
        daily_rate: rate,
        base_income,
        holiday_income,
        overtime_income,
        total_income,
        paid_amount: ledger.paid_amount,
        pending_amount: total_income - ledger.paid_amount,
    }
}

/// Calculates the summary for a month, resolving the ledger from the
/// profile.
///
/// A month with no stored ledger reads as empty: every tally and income
/// figure is zero and nothing is pending.
pub fn summary_for_month(profile: &Profile, month: YearMonth) -> MonthlySummary {
    match profile.month(&month.key()) {
        Some(ledger) => calculate_monthly_summary(profile, ledger, month),
        None => calculate_monthly_summary(profile, &MonthlyData::default(), month),
    }
}
