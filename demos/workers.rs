//! Several worker threads sharing one pacer.
//!
//! Run with `RUST_LOG=steady_pace=trace` to see every admission.

use std::sync::Arc;
use std::thread;
use std::time::Instant;
use steady_pace::{Limiter, PacerBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Pacing can be switched off without touching the workers
    let disabled = std::env::args().any(|arg| arg == "--unbounded");
    let builder = PacerBuilder::new().with_rate(20);
    let builder = if disabled { builder.unbounded() } else { builder };
    let limiter = Arc::new(builder.build().expect("valid pacer configuration"));

    println!("=== Shared Pacer Example ===\n");
    match limiter.interval() {
        Some(interval) => println!("Admitting one job every {:?}\n", interval),
        None => println!("Pacing disabled\n"),
    }

    let start = Instant::now();
    let handles: Vec<_> = (0..3)
        .map(|worker| {
            let limiter = Arc::clone(&limiter);
            thread::spawn(move || {
                for job in 0..5 {
                    limiter.admit();
                    info!(
                        worker,
                        job,
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "job started"
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let snapshot = limiter.metrics().snapshot();
    println!("\n=== Example Complete ===");
    println!(
        "{} jobs in {:?}, {:.0}% delayed, average wait {:?}",
        snapshot.admissions,
        start.elapsed(),
        snapshot.delay_rate() * 100.0,
        snapshot.average_wait()
    );
}
