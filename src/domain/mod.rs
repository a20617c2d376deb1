//! Domain layer - pure pacing logic with no external dependencies.
//!
//! This layer contains the core concepts and invariants of pacing:
//! - Validated admission rates and the interval they imply
//! - The admission schedule (leaky bucket with a capacity of one)
//!
//! Nothing here reads a clock or sleeps, so every decision can be tested
//! with synthetic instants.

pub mod rate;
pub mod schedule;
