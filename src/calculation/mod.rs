//! Payroll calculation engine.
//!
//! This module contains the pure calculation functions that derive a
//! monthly payroll summary from a profile's salary terms, weekly-off
//! schedule, and a month's attendance ledger: month and date key
//! derivation, working-day counting, attendance tallies, rate derivation,
//! and the summary composition itself. Everything here is synchronous,
//! stateless, and total over its domain.

mod calendar;
mod payroll;
mod rates;
mod tallies;
mod working_days;

pub use calendar::YearMonth;
pub use payroll::{calculate_monthly_summary, summary_for_month};
pub use rates::{STANDARD_WORKDAY_HOURS, daily_rate, effective_overtime_rate};
pub use tallies::{AttendanceTallies, tally_attendance};
pub use working_days::{count_working_days, is_weekly_off};
