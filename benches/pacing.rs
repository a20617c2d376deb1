use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use std::time::{Duration, Instant};
use steady_pace::{Limiter, Pacer, Rate, Schedule, Sleeper, SystemClock};

/// Sleeper that returns immediately, isolating the admission bookkeeping.
#[derive(Debug)]
struct NoopSleeper;

impl Sleeper for NoopSleeper {
    fn sleep(&self, _duration: Duration) {}
}

/// Benchmark the pure scheduling decision
fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("reserve_spaced", |b| {
        let interval = Duration::from_micros(10);
        b.iter(|| {
            let mut schedule = Schedule::new(interval);
            let start = Instant::now();
            for i in 0..1000 {
                black_box(schedule.reserve(black_box(start + interval * i)));
            }
        })
    });

    group.finish();
}

/// Benchmark admission overhead of each limiter variant
fn bench_admit(c: &mut Criterion) {
    let mut group = c.benchmark_group("admit");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("unbounded", |b| {
        let limiter = steady_pace::new_unbounded();
        b.iter(|| {
            for _ in 0..1000 {
                black_box(limiter.admit());
            }
        })
    });

    group.bench_function("paced_noop_sleep", |b| {
        let pacer = Pacer::from_parts(
            Rate::per_second(1_000_000).unwrap(),
            Arc::new(SystemClock::new()),
            Arc::new(NoopSleeper),
        );
        b.iter(|| {
            for _ in 0..1000 {
                black_box(pacer.admit());
            }
        })
    });

    group.finish();
}

/// Benchmark lock contention with several threads sharing one pacer
fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 250) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let pacer = Arc::new(Pacer::from_parts(
                Rate::per_second(1_000_000).unwrap(),
                Arc::new(SystemClock::new()),
                Arc::new(NoopSleeper),
            ));
            b.iter(|| {
                std::thread::scope(|scope| {
                    for _ in 0..threads {
                        let pacer = Arc::clone(&pacer);
                        scope.spawn(move || {
                            for _ in 0..250 {
                                black_box(pacer.admit());
                            }
                        });
                    }
                });
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schedule, bench_admit, bench_contended);
criterion_main!(benches);
