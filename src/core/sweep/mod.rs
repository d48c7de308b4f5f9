//! Benchmark sweep
//!
//! Runs every configured (dataset, strategy) pair and records the outcome of
//! each in a [`SweepSummary`].

pub mod coordinator;
pub mod summary;

pub use coordinator::{SweepCoordinator, SweepSettings, SUMMARY_FILE};
pub use summary::{PairOutcome, PairStatus, SweepSummary};
