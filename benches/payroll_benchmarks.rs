//! Performance benchmarks for the payroll engine.
//!
//! Covers the pure payout calculation, full payroll runs over the in-memory
//! store at several school sizes, and the generate endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::calculate_payout;
use payroll_engine::config::EngineSettings;
use payroll_engine::models::{
    AttendanceDay, AttendanceStatus, AttendanceSummary, PayComponent, SalaryProfile, StaffMember,
};
use payroll_engine::payroll::PayrollRunner;
use payroll_engine::store::InMemoryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const SCHOOL: &str = "bench_school";

fn profile(basic: i64) -> SalaryProfile {
    SalaryProfile {
        basic_salary: Decimal::from(basic),
        allowances: vec![
            PayComponent::new("HRA", Decimal::from(5000)),
            PayComponent::new("Transport", Decimal::new(125050, 2)),
        ],
        deductions: vec![
            PayComponent::new("PF", Decimal::from(1800)),
            PayComponent::new("Professional tax", Decimal::from(200)),
        ],
    }
}

/// Builds a store with `staff_count` staff, each with a profile and a full
/// month of attendance for September 2025.
fn build_store(rt: &tokio::runtime::Runtime, staff_count: usize) -> InMemoryStore {
    let store = InMemoryStore::new();
    rt.block_on(async {
        for i in 0..staff_count {
            let id = format!("T{:04}", i);
            store
                .add_staff(SCHOOL, StaffMember::new(&id, format!("Staff {}", i)))
                .await;
            store
                .set_profile(SCHOOL, &id, profile(20000 + (i as i64 % 10) * 1000))
                .await;

            let records: Vec<AttendanceDay> = (1..=30)
                .map(|d| {
                    let date = NaiveDate::from_ymd_opt(2025, 9, d).unwrap();
                    let status = match (d as usize + i) % 10 {
                        0 => AttendanceStatus::Absent,
                        1 => AttendanceStatus::Leave,
                        _ => AttendanceStatus::Present,
                    };
                    AttendanceDay::new(date, status)
                })
                .collect();
            store.record_attendance(SCHOOL, &id, records).await;
        }
    });
    store
}

/// Benchmark: Single payout calculation.
fn bench_calculate_payout(c: &mut Criterion) {
    let profile = profile(30000);
    let summary = AttendanceSummary::new(30, 25, 3, 2);

    c.bench_function("calculate_payout", |b| {
        b.iter(|| calculate_payout(black_box(&profile), black_box(&summary)))
    });
}

/// Benchmark: Full payroll runs at increasing school sizes.
fn bench_payroll_run(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("payroll_run");
    // Each iteration appends a run, so keep sample counts modest.
    group.sample_size(10);

    for staff_count in [10, 100, 500].iter() {
        let runner =
            PayrollRunner::from_store(build_store(&rt, *staff_count), EngineSettings::default());

        group.throughput(Throughput::Elements(*staff_count as u64));
        group.bench_with_input(
            BenchmarkId::new("staff", staff_count),
            staff_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let run = runner.generate(SCHOOL, "2025-09").await.unwrap();
                    black_box(run)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: Generate endpoint for a 100-staff school.
fn bench_generate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let runner = PayrollRunner::from_store(build_store(&rt, 100), EngineSettings::default());
    let router = create_router(AppState::new(runner));
    let body = serde_json::json!({ "month": "2025-09" }).to_string();

    let mut group = c.benchmark_group("http");
    group.sample_size(10);

    group.bench_function("generate_100_staff", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(format!("/schools/{}/payroll", SCHOOL))
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_calculate_payout,
    bench_payroll_run,
    bench_generate_endpoint,
);
criterion_main!(benches);
