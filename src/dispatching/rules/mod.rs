//! Built-in ready-queue ordering rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//! Ties are left in queue (arrival) order because the ready queue uses a
//! stable sort.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Shortest Remaining Time.
///
/// Orders by ticks of work still outstanding. Before a process first runs
/// this equals its burst time, so the same rule serves SJF and SRTF.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Most urgent priority first.
///
/// Uses the current (possibly aged) priority; lower values are more urgent.
#[derive(Debug, Clone, Copy)]
pub struct MostUrgent;

impl DispatchingRule for MostUrgent {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        u64::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_remaining() {
        let mut long = Process::new(1, 0, 8, 0);
        let short = Process::new(2, 0, 3, 0);
        assert!(ShortestRemaining.evaluate(&short) < ShortestRemaining.evaluate(&long));

        long.remaining_time = 1;
        assert!(ShortestRemaining.evaluate(&long) < ShortestRemaining.evaluate(&short));
    }

    #[test]
    fn test_most_urgent_uses_aged_priority() {
        let mut aged = Process::new(1, 0, 1, 4);
        let other = Process::new(2, 0, 1, 2);
        assert!(MostUrgent.evaluate(&other) < MostUrgent.evaluate(&aged));

        aged.priority = 1;
        assert!(MostUrgent.evaluate(&aged) < MostUrgent.evaluate(&other));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestRemaining.name(), "SRT");
        assert_eq!(MostUrgent.description(), "Process Priority");
    }
}
