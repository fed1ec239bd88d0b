//! Performance benchmarks for the payroll calculation engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Empty ledger summary: < 10μs mean
//! - Fully marked month: < 50μs mean
//! - Twelve-month sweep: < 500μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use attendance_tracker::calculation::{YearMonth, calculate_monthly_summary};
use attendance_tracker::models::{AttendanceRecord, AttendanceStatus, MonthlyData, Profile};

fn bench_profile() -> Profile {
    let mut profile = Profile::new("bench");
    profile.monthly_salary = Decimal::new(3000, 0);
    profile.weekly_off_days = [0u8].into_iter().collect();
    profile
}

/// Builds a ledger with every day of the month marked and some overtime.
fn full_ledger(month: YearMonth) -> MonthlyData {
    let statuses = [
        AttendanceStatus::Present,
        AttendanceStatus::Present,
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Holiday,
        AttendanceStatus::HolidayWorked,
        AttendanceStatus::WeeklyOff,
    ];

    let mut ledger = MonthlyData::default();
    for (index, date) in month.dates().enumerate() {
        ledger.attendance.insert(
            YearMonth::date_key(date),
            AttendanceRecord {
                status: statuses[index % statuses.len()],
                overtime: Decimal::from((index % 3) as u32),
            },
        );
    }
    ledger.paid_amount = Decimal::new(1500, 0);
    ledger
}

fn bench_empty_ledger(c: &mut Criterion) {
    let profile = bench_profile();
    let ledger = MonthlyData::default();
    let month = YearMonth::new(2026, 6).expect("valid month");

    c.bench_function("summary_empty_ledger", |b| {
        b.iter(|| {
            calculate_monthly_summary(black_box(&profile), black_box(&ledger), black_box(month))
        })
    });
}

fn bench_full_month(c: &mut Criterion) {
    let profile = bench_profile();
    let month = YearMonth::new(2026, 1).expect("valid month");
    let ledger = full_ledger(month);

    c.bench_function("summary_full_month", |b| {
        b.iter(|| {
            calculate_monthly_summary(black_box(&profile), black_box(&ledger), black_box(month))
        })
    });
}

fn bench_year_sweep(c: &mut Criterion) {
    let profile = bench_profile();
    let months: Vec<(YearMonth, MonthlyData)> = (1..=12)
        .map(|m| {
            let month = YearMonth::new(2026, m).expect("valid month");
            (month, full_ledger(month))
        })
        .collect();

    c.bench_with_input(
        BenchmarkId::new("summary_year_sweep", 12),
        &months,
        |b, months| {
            b.iter(|| {
                for (month, ledger) in months {
                    black_box(calculate_monthly_summary(&profile, ledger, *month));
                }
            })
        },
    );
}

criterion_group!(
    benches,
    bench_empty_ledger,
    bench_full_month,
    bench_year_sweep
);
criterion_main!(benches);
