//! Scheduling engine, metrics and algorithm comparison.
//!
//! # Algorithm
//!
//! `SchedulerEngine` advances a discrete clock one tick at a time over a
//! fixed number of logical cores, applying the admission, aging, ordering,
//! preemption and dispatch rules of the configured algorithm.
//!
//! # Metrics
//!
//! `SimulationMetrics` computes utilization, throughput, context-switch
//! overhead and mean waiting / turnaround times from an engine run.
//!
//! # Comparison
//!
//! `ComparisonRunner` runs all six algorithms over independent copies of
//! one process set and keeps one summary row per algorithm.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod comparison;
mod engine;
mod metrics;

pub use comparison::{ComparisonRow, ComparisonRunner, ComparisonTable};
pub use engine::{
    simulate, CoreSlot, NoopObserver, SchedulerEngine, SimulationOutcome, TickObserver,
    TickSnapshot,
};
pub use metrics::{ProcessMetrics, SimulationMetrics};
