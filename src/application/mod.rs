//! Application layer - orchestration of domain logic.
//!
//! This layer turns the pure admission schedule into callable limiters:
//! - Limiter capability trait and the throttled/unbounded variants
//! - Blocking pacer (mutex-guarded schedule, thread suspension)
//! - Async pacer for tokio tasks (`async` feature)
//! - Admission metrics
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. This keeps the application layer independent
//! from infrastructure details.

#[cfg(feature = "async")]
pub mod async_pacer;
pub mod limiter;
pub mod metrics;
pub mod pacer;
pub mod ports;
pub mod unbounded;
