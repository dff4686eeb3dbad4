//! Performance benchmarks for the shift ledger.
//!
//! Covers the pure aggregation and the full HTTP path:
//! - Month aggregation at increasing shift counts
//! - A month summary request through the router
//! - A quarter summary request through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_ledger::api::{AppState, create_router};
use shift_ledger::calculation::summarize;
use shift_ledger::config::{ConfigLoader, EngineConfig};
use shift_ledger::models::{MonthWindow, NonAccountingDay, Shift};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::with_empty_source(config)
}

/// Alternating day and overnight shifts across the month.
fn create_shifts(count: usize) -> Vec<Shift> {
    (0..count)
        .map(|i| {
            let day = (i % 28) as u32 + 1;
            let date = NaiveDate::from_ymd_opt(2026, 1, day).expect("valid date");
            if i % 2 == 0 {
                Shift::new(format!("shift_{:03}", i), date, "08:00:00", "17:00:00")
            } else {
                Shift::new(format!("shift_{:03}", i), date, "22:00:00", "06:00:00")
            }
        })
        .collect()
}

fn create_records() -> Vec<NonAccountingDay> {
    vec![NonAccountingDay {
        id: "nad_001".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 1, 12).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2026, 1, 16).expect("valid date"),
        reason: "Annual leave".to_string(),
    }]
}

fn shifts_json(count: usize) -> serde_json::Value {
    serde_json::to_value(create_shifts(count)).expect("shifts serialize")
}

/// Benchmark: pure aggregation at increasing shift counts.
fn bench_summarize_scaling(c: &mut Criterion) {
    let window = MonthWindow::new(2026, 1).expect("valid month");
    let config = EngineConfig::default();
    let records = create_records();

    let mut group = c.benchmark_group("summarize");
    for shift_count in [1usize, 10, 31, 100].iter() {
        let shifts = create_shifts(*shift_count);
        group.throughput(Throughput::Elements(*shift_count as u64));
        group.bench_with_input(BenchmarkId::new("shifts", shift_count), &shifts, |b, shifts| {
            b.iter(|| black_box(summarize(window, shifts, &records, &config)))
        });
    }
    group.finish();
}

/// Benchmark: a month summary request through the router.
fn bench_summary_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "reference_date": "2026-01-15",
        "shifts": shifts_json(22),
        "non_accounting_days": create_records()
    })
    .to_string();

    c.bench_function("summary_request_22_shifts", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/summary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: a quarter summary request through the router.
fn bench_quarter_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "year": 2026,
        "quarter": 1,
        "shifts": shifts_json(66),
        "non_accounting_days": create_records()
    })
    .to_string();

    c.bench_function("quarter_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/quarter")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_summarize_scaling,
    bench_summary_request,
    bench_quarter_request,
);
criterion_main!(benches);
