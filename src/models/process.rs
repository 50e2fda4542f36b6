//! Process model.
//!
//! A process is a unit of CPU work with an arrival tick, a burst length and
//! a priority. Besides its static description it carries the run-state the
//! engine mutates during one simulation (remaining time, aging accumulator,
//! admission and completion flags).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier, assigned by 1-based input order.
pub type Pid = usize;

/// Discrete simulation time unit.
pub type Tick = u64;

/// One raw input row, as read from a workload file or UI table.
///
/// Fields are signed so that negative values can be detected and rejected
/// during normalization instead of wrapping silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRow {
    /// Tick at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent).
    #[serde(default)]
    pub priority: i64,
}

impl ProcessRow {
    /// Creates a row from an (arrival, burst, priority) triple.
    pub fn new(arrival_time: i64, burst_time: i64, priority: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// A process record with its simulation run-state.
///
/// # Invariants
/// - `0 <= remaining_time <= burst_time`
/// - once `done`: `turnaround_time = completion_tick - arrival_time` and
///   `waiting_time = turnaround_time - burst_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// 1-based identifier.
    pub pid: Pid,
    /// Arrival tick.
    pub arrival_time: Tick,
    /// Total CPU ticks required (>= 1).
    pub burst_time: Tick,
    /// Current priority. Aging may lower it below `base_priority`.
    pub priority: u32,
    /// Priority as given in the input.
    pub base_priority: u32,
    /// Ticks of CPU work still outstanding.
    pub remaining_time: Tick,
    /// Ready ticks accumulated since the last aging boost.
    pub waiting_accumulator: u32,
    /// Whether the process has entered the ready queue.
    pub admitted: bool,
    /// Whether the process has finished.
    pub done: bool,
    /// Tick at which the last unit of work finished. `None` until done.
    pub completion_tick: Option<Tick>,
    /// Time spent ready but not running. Valid once done.
    pub waiting_time: Tick,
    /// Completion minus arrival. Valid once done.
    pub turnaround_time: Tick,
}

impl Process {
    /// Creates a process with reset run-state.
    pub fn new(pid: Pid, arrival_time: Tick, burst_time: Tick, priority: u32) -> Self {
        debug_assert!(burst_time >= 1, "P{pid} must need at least one tick");
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            base_priority: priority,
            remaining_time: burst_time,
            waiting_accumulator: 0,
            admitted: false,
            done: false,
            completion_tick: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Returns a copy with all run-state reset to its initial values.
    ///
    /// Used to give every simulation run its own independent process set.
    pub fn fresh_copy(&self) -> Self {
        Self::new(
            self.pid,
            self.arrival_time,
            self.burst_time,
            self.base_priority,
        )
    }

    /// Display label, e.g. `P3`.
    pub fn label(&self) -> String {
        format!("P{}", self.pid)
    }

    /// Records completion at `tick` and derives turnaround and waiting time.
    pub(crate) fn complete_at(&mut self, tick: Tick) {
        debug_assert_eq!(self.remaining_time, 0, "P{} completed early", self.pid);
        self.done = true;
        self.completion_tick = Some(tick);
        self.turnaround_time = tick - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new_resets_state() {
        let p = Process::new(1, 3, 5, 2);
        assert_eq!(p.remaining_time, 5);
        assert_eq!(p.base_priority, 2);
        assert_eq!(p.waiting_accumulator, 0);
        assert!(!p.admitted);
        assert!(!p.done);
        assert_eq!(p.completion_tick, None);
        assert_eq!(p.label(), "P1");
    }

    #[test]
    fn test_fresh_copy_restores_priority() {
        let mut p = Process::new(2, 0, 4, 3);
        p.priority = 1;
        p.remaining_time = 0;
        p.admitted = true;
        p.waiting_accumulator = 4;
        p.complete_at(9);

        let fresh = p.fresh_copy();
        assert_eq!(fresh, Process::new(2, 0, 4, 3));
    }

    #[test]
    fn test_complete_at() {
        let mut p = Process::new(1, 2, 3, 0);
        p.remaining_time = 0;
        p.complete_at(10);
        assert!(p.done);
        assert_eq!(p.turnaround_time, 8);
        assert_eq!(p.waiting_time, 5);
    }

    #[test]
    fn test_row_priority_defaults_to_zero() {
        let row: ProcessRow =
            serde_json::from_str(r#"{"arrival_time": 1, "burst_time": 2}"#).unwrap();
        assert_eq!(row, ProcessRow::new(1, 2, 0));
    }
}
