//! Per-algorithm ordering and preemption policy.

use super::rules::{MostUrgent, ShortestRemaining};
use super::DispatchingRule;
use crate::models::{Algorithm, Process};

/// When a running process is forced off its core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preemption {
    /// Runs to completion once dispatched.
    Never,
    /// Preempted when the ready head has strictly less remaining time.
    ShorterRemaining,
    /// Preempted when the ready head has a strictly more urgent priority.
    MoreUrgent,
    /// Preempted when the core's quantum is used up.
    QuantumExpired,
}

impl Preemption {
    /// Decides whether `running` must leave its core this tick.
    ///
    /// `quantum_remaining` is `None` when no quantum is configured, which
    /// means a quantum can never expire.
    pub fn should_preempt(
        &self,
        head: Option<&Process>,
        running: &Process,
        quantum_remaining: Option<u64>,
    ) -> bool {
        match self {
            Preemption::Never => false,
            Preemption::ShorterRemaining => {
                head.is_some_and(|h| h.remaining_time < running.remaining_time)
            }
            Preemption::MoreUrgent => head.is_some_and(|h| h.priority < running.priority),
            Preemption::QuantumExpired => quantum_remaining == Some(0),
        }
    }
}

/// Ready-queue ordering plus preemption behavior for one algorithm.
#[derive(Debug, Clone, Copy)]
pub struct SchedulingPolicy {
    /// Ordering rule applied every tick. `None` keeps FIFO order.
    pub rule: Option<&'static dyn DispatchingRule>,
    /// Preemption behavior for busy cores.
    pub preemption: Preemption,
}

impl SchedulingPolicy {
    /// Policy used by `algorithm`.
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        let shortest: &'static dyn DispatchingRule = &ShortestRemaining;
        let urgent: &'static dyn DispatchingRule = &MostUrgent;

        let (rule, preemption) = match algorithm {
            Algorithm::Fcfs => (None, Preemption::Never),
            Algorithm::Sjf => (Some(shortest), Preemption::Never),
            Algorithm::Srtf => (Some(shortest), Preemption::ShorterRemaining),
            Algorithm::Priority => (Some(urgent), Preemption::Never),
            Algorithm::PreemptivePriority => (Some(urgent), Preemption::MoreUrgent),
            Algorithm::RoundRobin => (None, Preemption::QuantumExpired),
        };
        Self { rule, preemption }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table() {
        let fcfs = SchedulingPolicy::for_algorithm(Algorithm::Fcfs);
        assert!(fcfs.rule.is_none());
        assert_eq!(fcfs.preemption, Preemption::Never);

        let sjf = SchedulingPolicy::for_algorithm(Algorithm::Sjf);
        assert_eq!(sjf.rule.map(|r| r.name()), Some("SRT"));
        assert_eq!(sjf.preemption, Preemption::Never);

        let pprio = SchedulingPolicy::for_algorithm(Algorithm::PreemptivePriority);
        assert_eq!(pprio.rule.map(|r| r.name()), Some("PRIORITY"));
        assert_eq!(pprio.preemption, Preemption::MoreUrgent);

        let rr = SchedulingPolicy::for_algorithm(Algorithm::RoundRobin);
        assert!(rr.rule.is_none());
        assert_eq!(rr.preemption, Preemption::QuantumExpired);
    }

    #[test]
    fn test_shorter_remaining_is_strict() {
        let mut running = Process::new(1, 0, 4, 0);
        running.remaining_time = 3;
        let equal = Process::new(2, 0, 3, 0);
        let shorter = Process::new(3, 0, 2, 0);

        let p = Preemption::ShorterRemaining;
        assert!(!p.should_preempt(Some(&equal), &running, None));
        assert!(p.should_preempt(Some(&shorter), &running, None));
        assert!(!p.should_preempt(None, &running, None));
    }

    #[test]
    fn test_more_urgent_is_strict() {
        let running = Process::new(1, 0, 4, 2);
        let p = Preemption::MoreUrgent;
        assert!(!p.should_preempt(Some(&Process::new(2, 0, 1, 2)), &running, None));
        assert!(p.should_preempt(Some(&Process::new(3, 0, 1, 1)), &running, None));
    }

    #[test]
    fn test_quantum_expired() {
        let running = Process::new(1, 0, 4, 0);
        let p = Preemption::QuantumExpired;
        assert!(p.should_preempt(None, &running, Some(0)));
        assert!(!p.should_preempt(None, &running, Some(1)));
        assert!(!p.should_preempt(None, &running, None));
    }

    #[test]
    fn test_never() {
        let running = Process::new(1, 0, 9, 5);
        let head = Process::new(2, 0, 1, 0);
        assert!(!Preemption::Never.should_preempt(Some(&head), &running, Some(0)));
    }
}
