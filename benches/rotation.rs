// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the timer-driven page components.
//!
//! Measures the performance of:
//! - Virtual clock dispatch with many pending timers
//! - A full hour of landing-page activity in virtual time
//! - Notification churn (notify supersedes notify)

use coming_soon::config::Config;
use coming_soon::landing::{LandingPage, Surfaces};
use coming_soon::notifications::{Notifier, Severity};
use coming_soon::scheduler::{Scheduler, VirtualClock};
use coming_soon::test_utils::{RecordingSurface, RecordingToasts};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::rc::Rc;
use std::time::Duration;

/// Benchmark dispatching one thousand one-shot timers.
fn bench_clock_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual_clock");

    group.bench_function("dispatch_1000_timers", |b| {
        b.iter(|| {
            let clock = VirtualClock::new();
            for i in 0..1000u64 {
                clock.after(Duration::from_millis(i % 97), Box::new(|| {}));
            }
            black_box(clock.advance(Duration::from_millis(100)));
        });
    });

    group.finish();
}

/// Benchmark one hour of virtual time with both rotators running.
fn bench_landing_hour(c: &mut Criterion) {
    let mut group = c.benchmark_group("landing_page");

    group.bench_function("one_hour_virtual", |b| {
        b.iter(|| {
            let clock = Rc::new(VirtualClock::new());
            let page = LandingPage::new(
                &Config::default(),
                clock.clone(),
                Surfaces {
                    message: RecordingSurface::shared(),
                    progress: RecordingSurface::shared(),
                    notifications: RecordingToasts::shared(),
                },
            );
            page.on_ready();
            clock.advance(Duration::from_secs(3600));
            black_box(page.message_rotator().map(|rotator| rotator.ticks()));
        });
    });

    group.finish();
}

/// Benchmark rapid notify calls, each superseding the previous one.
fn bench_notify_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("notifier");

    group.bench_function("notify_supersede_100", |b| {
        b.iter(|| {
            let clock = Rc::new(VirtualClock::new());
            let notifier = Notifier::new(
                clock.clone(),
                RecordingToasts::shared(),
                Duration::from_secs(5),
            );
            for i in 0..100 {
                notifier.notify(format!("message {i}"), Severity::Info);
            }
            black_box(clock.pending());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_clock_dispatch,
    bench_landing_hour,
    bench_notify_churn
);
criterion_main!(benches);
