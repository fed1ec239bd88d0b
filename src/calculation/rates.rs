//! Daily and overtime rate derivation.
//!
//! This module derives the per-day rate from a monthly salary and the
//! effective hourly overtime rate from a profile's terms.

use rust_decimal::Decimal;

/// Hours in a standard workday, used to derive an overtime rate when the
/// profile does not set one explicitly.
pub const STANDARD_WORKDAY_HOURS: u32 = 8;

/// Derives the daily rate from a monthly salary and a working-day count.
///
/// A month whose every day is scheduled off has no working days; the rate
/// is then a defined zero rather than a division error.
///
/// # Example
///
/// ```
/// use attendance_tracker::calculation::daily_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_rate(Decimal::new(3000, 0), 24), Decimal::new(125, 0));
/// assert_eq!(daily_rate(Decimal::new(3000, 0), 0), Decimal::ZERO);
/// ```
pub fn daily_rate(monthly_salary: Decimal, working_days: u32) -> Decimal {
    if working_days == 0 {
        Decimal::ZERO
    } else {
        monthly_salary / Decimal::from(working_days)
    }
}

/// Resolves the hourly overtime rate for a profile.
///
/// An explicitly configured rate wins; otherwise the rate is the daily
/// rate spread over a standard 8-hour workday.
///
/// # Example
///
/// ```
/// use attendance_tracker::calculation::effective_overtime_rate;
/// use rust_decimal::Decimal;
///
/// let daily = Decimal::new(120, 0);
/// assert_eq!(
///     effective_overtime_rate(None, daily),
///     Decimal::new(15, 0)
/// );
/// assert_eq!(
///     effective_overtime_rate(Some(Decimal::new(20, 0)), daily),
///     Decimal::new(20, 0)
/// );
/// ```
pub fn effective_overtime_rate(profile_rate: Option<Decimal>, daily_rate: Decimal) -> Decimal {
    profile_rate.unwrap_or_else(|| daily_rate / Decimal::from(STANDARD_WORKDAY_HOURS))
}
