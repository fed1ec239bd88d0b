//! Attendance tallies.
//!
//! This module counts a month's stored attendance records by status and
//! sums overtime hours across the ledger. Days without a stored record
//! contribute nothing, even when their weekday is scheduled off; the
//! schedule-derived off-day default is a display concern of the calendar
//! editor and never reaches these tallies.

use rust_decimal::Decimal;

use crate::models::{AttendanceStatus, MonthlyData};

/// Per-status day counts and the overtime total for one ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceTallies {
    /// Stored `Present` records.
    pub present: u32,
    /// Stored `Absent` records.
    pub absent: u32,
    /// Stored `Holiday` records.
    pub holiday: u32,
    /// Stored `HolidayWorked` records.
    pub holiday_worked: u32,
    /// Stored `WeeklyOff` records.
    pub weekly_off: u32,
    /// Overtime hours summed across all records regardless of status.
    pub overtime_hours: Decimal,
}

/// Tallies every stored record in a monthly ledger.
///
/// # Example
///
/// ```
/// use attendance_tracker::calculation::tally_attendance;
/// use attendance_tracker::models::{AttendanceRecord, AttendanceStatus, MonthlyData};
/// use rust_decimal::Decimal;
///
/// let mut ledger = MonthlyData::default();
/// ledger.attendance.insert(
///     "2026-03-02".to_string(),
///     AttendanceRecord {
///         status: AttendanceStatus::Present,
///         overtime: Decimal::new(2, 0),
///     },
/// );
///
/// let tallies = tally_attendance(&ledger);
/// assert_eq!(tallies.present, 1);
/// assert_eq!(tallies.overtime_hours, Decimal::new(2, 0));
/// ```
pub fn tally_attendance(ledger: &MonthlyData) -> AttendanceTallies {
    let mut tallies = AttendanceTallies::default();

    for record in ledger.attendance.values() {
        match record.status {
            AttendanceStatus::Present => tallies.present += 1,
            AttendanceStatus::Absent => tallies.absent += 1,
            AttendanceStatus::Holiday => tallies.holiday += 1,
            AttendanceStatus::HolidayWorked => tallies.holiday_worked += 1,
            AttendanceStatus::WeeklyOff => tallies.weekly_off += 1,
        }
        tallies.overtime_hours += record.overtime;
    }

    tallies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;
    use proptest::prelude::*;

    fn record(status: AttendanceStatus, overtime: Decimal) -> AttendanceRecord {
        AttendanceRecord { status, overtime }
    }

    /// TA-001: empty ledger tallies to zero
    #[test]
    fn test_empty_ledger_tallies_to_zero() {
        let tallies = tally_attendance(&MonthlyData::default());
        assert_eq!(tallies, AttendanceTallies::default());
        assert_eq!(tallies.overtime_hours, Decimal::ZERO);
    }

    /// TA-002: each status lands in its own bucket
    #[test]
    fn test_statuses_tally_into_their_buckets() {
        let mut ledger = MonthlyData::default();
        ledger.attendance.insert(
            "2026-03-02".to_string(),
            record(AttendanceStatus::Present, Decimal::ZERO),
        );
        ledger.attendance.insert(
            "2026-03-03".to_string(),
            record(AttendanceStatus::Present, Decimal::ZERO),
        );
        ledger.attendance.insert(
            "2026-03-04".to_string(),
            record(AttendanceStatus::Absent, Decimal::ZERO),
        );
        ledger.attendance.insert(
            "2026-03-05".to_string(),
            record(AttendanceStatus::Holiday, Decimal::ZERO),
        );
        ledger.attendance.insert(
            "2026-03-06".to_string(),
            record(AttendanceStatus::HolidayWorked, Decimal::ZERO),
        );
        ledger.attendance.insert(
            "2026-03-08".to_string(),
            record(AttendanceStatus::WeeklyOff, Decimal::ZERO),
        );

        let tallies = tally_attendance(&ledger);
        assert_eq!(tallies.present, 2);
        assert_eq!(tallies.absent, 1);
        assert_eq!(tallies.holiday, 1);
        assert_eq!(tallies.holiday_worked, 1);
        assert_eq!(tallies.weekly_off, 1);
    }

    /// TA-003: overtime sums regardless of status
    #[test]
    fn test_overtime_sums_across_all_statuses() {
        let mut ledger = MonthlyData::default();
        ledger.attendance.insert(
            "2026-03-02".to_string(),
            record(AttendanceStatus::Present, Decimal::new(15, 1)),
        );
        ledger.attendance.insert(
            "2026-03-04".to_string(),
            record(AttendanceStatus::Absent, Decimal::new(3, 0)),
        );
        ledger.attendance.insert(
            "2026-03-08".to_string(),
            record(AttendanceStatus::WeeklyOff, Decimal::new(25, 1)),
        );

        let tallies = tally_attendance(&ledger);
        assert_eq!(tallies.overtime_hours, Decimal::new(70, 1)); // 7.0
    }

    /// TA-004: unmarked days contribute nothing
    #[test]
    fn test_only_stored_records_are_tallied() {
        // One record in a 31-day month; the other 30 days do not exist in
        // the map and so never reach any bucket.
        let mut ledger = MonthlyData::default();
        ledger.attendance.insert(
            "2026-03-02".to_string(),
            record(AttendanceStatus::Present, Decimal::ZERO),
        );

        let tallies = tally_attendance(&ledger);
        assert_eq!(
            tallies.present
                + tallies.absent
                + tallies.holiday
                + tallies.holiday_worked
                + tallies.weekly_off,
            1
        );
    }

    proptest! {
        /// The overtime total always equals the sum over all entries.
        #[test]
        fn prop_overtime_total_is_sum_over_entries(
            hours in proptest::collection::vec(0u32..100, 0..28),
        ) {
            let statuses = [
                AttendanceStatus::Present,
                AttendanceStatus::Absent,
                AttendanceStatus::Holiday,
                AttendanceStatus::HolidayWorked,
                AttendanceStatus::WeeklyOff,
            ];

            let mut ledger = MonthlyData::default();
            for (day, h) in hours.iter().enumerate() {
                ledger.attendance.insert(
                    format!("2026-03-{:02}", day + 1),
                    record(statuses[day % statuses.len()], Decimal::from(*h)),
                );
            }

            let expected: Decimal = hours.iter().map(|h| Decimal::from(*h)).sum();
            prop_assert_eq!(tally_attendance(&ledger).overtime_hours, expected);
        }

        /// Status buckets always sum to the number of stored records.
        #[test]
        fn prop_buckets_sum_to_record_count(count in 0usize..28) {
            let statuses = [
                AttendanceStatus::Present,
                AttendanceStatus::Absent,
                AttendanceStatus::Holiday,
                AttendanceStatus::HolidayWorked,
                AttendanceStatus::WeeklyOff,
            ];

            let mut ledger = MonthlyData::default();
            for day in 0..count {
                ledger.attendance.insert(
                    format!("2026-03-{:02}", day + 1),
                    record(statuses[day % statuses.len()], Decimal::ZERO),
                );
            }

            let tallies = tally_attendance(&ledger);
            let total = tallies.present
                + tallies.absent
                + tallies.holiday
                + tallies.holiday_worked
                + tallies.weekly_off;
            prop_assert_eq!(total as usize, count);
        }
    }
}
