//! Ready-queue ordering rules and preemption policies.
//!
//! Each scheduling algorithm is described by a [`SchedulingPolicy`]: an
//! optional ordering rule applied to the ready queue every tick, plus the
//! condition under which a running process is preempted.
//!
//! | Algorithm | Ordering | Preemption |
//! |-----------|----------|------------|
//! | FCFS | FIFO | never |
//! | SJF | remaining time | never |
//! | SRTF | remaining time | shorter head |
//! | PRIORITY | priority | never |
//! | PPRIORITY | priority | more urgent head |
//! | RR | FIFO | quantum expiry |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{Preemption, SchedulingPolicy};
//! use u_cpusched::models::Algorithm;
//!
//! let policy = SchedulingPolicy::for_algorithm(Algorithm::Srtf);
//! assert_eq!(policy.preemption, Preemption::ShorterRemaining);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod policy;
mod ready_queue;
pub mod rules;

pub use policy::{Preemption, SchedulingPolicy};
pub use ready_queue::ReadyQueue;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = scheduled first.
pub type RuleScore = u64;

/// A rule that orders the ready queue.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT").
    fn name(&self) -> &'static str;

    /// Evaluates a process. Lower = dispatched earlier.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
