// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification manager operations.
//!
//! Measures the performance of:
//! - Pushing notifications (with and without a visibility cap)
//! - Ticking a loaded container (deadline evaluation)
//! - A full push/tick/expire churn cycle

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toasts::notifications::{Manager, Notification, DISPLAY_DURATION, EXIT_DURATION};
use std::hint::black_box;
use std::time::Instant;

/// Benchmark pushing notifications into an unbounded container.
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager");

    group.bench_function("push_100_unbounded", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            for i in 0..100 {
                manager.push(Notification::info(format!("message-{i}")));
            }
            black_box(&manager);
        });
    });

    group.bench_function("push_100_capped", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            manager.set_max_visible(Some(3));
            for i in 0..100 {
                manager.push(Notification::info(format!("message-{i}")));
            }
            black_box(&manager);
        });
    });

    group.finish();
}

/// Benchmark ticking a loaded container.
///
/// The idle case (no deadline passed) is the common steady state; the
/// expiring case measures removal plus queue promotion.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager");

    let mut loaded = Manager::new();
    for i in 0..100 {
        loaded.push(Notification::info(format!("message-{i}")));
    }
    let idle_now = Instant::now();

    group.bench_function("tick_100_idle", |b| {
        b.iter(|| {
            loaded.tick(black_box(idle_now));
            black_box(&loaded);
        });
    });

    group.bench_function("tick_100_expiring", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            let mut latest = Instant::now();
            for i in 0..100 {
                let notification = Notification::info(format!("message-{i}"));
                latest = notification.created_at();
                manager.push(notification);
            }
            manager.tick(latest + DISPLAY_DURATION);
            manager.tick(latest + DISPLAY_DURATION + EXIT_DURATION);
            black_box(&manager);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_tick);
criterion_main!(benches);
