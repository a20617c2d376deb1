//! Tokio tasks sharing one async pacer, with a deadline layered on top.

use std::sync::Arc;
use std::time::{Duration, Instant};
use steady_pace::AsyncPacer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pacer = Arc::new(AsyncPacer::new(10).expect("non-zero rate"));
    let start = Instant::now();

    let tasks: Vec<_> = (0..4)
        .map(|task| {
            let pacer = Arc::clone(&pacer);
            tokio::spawn(async move {
                for job in 0..3 {
                    // Give up on a slot that is more than half a second away
                    let deadline = Duration::from_millis(500);
                    match tokio::time::timeout(deadline, pacer.admit()).await {
                        Ok(_) => info!(
                            task,
                            job,
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "job started"
                        ),
                        Err(_) => warn!(task, job, "gave up waiting for a slot"),
                    }
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.expect("task panicked");
    }

    let snapshot = pacer.metrics().snapshot();
    println!(
        "{} jobs admitted in {:?}, average wait {:?}",
        snapshot.admissions,
        start.elapsed(),
        snapshot.average_wait()
    );
}
