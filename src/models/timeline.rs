//! Gantt timeline model.
//!
//! A timeline is the ordered list of execution intervals produced by one
//! simulation run. Each interval records which process held which core
//! over a half-open tick range `[start_tick, end_tick)`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Pid, Tick};

/// One contiguous execution interval on a single core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// Process that ran.
    pub pid: Pid,
    /// First tick of the interval.
    pub start_tick: Tick,
    /// Tick after the last executed tick.
    pub end_tick: Tick,
    /// Zero-based core index.
    pub core_index: usize,
}

impl GanttEntry {
    /// Creates a new interval.
    pub fn new(pid: Pid, start_tick: Tick, end_tick: Tick, core_index: usize) -> Self {
        Self {
            pid,
            start_tick,
            end_tick,
            core_index,
        }
    }

    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end_tick - self.start_tick
    }
}

/// Ordered sequence of execution intervals, in the order they were opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Intervals, sorted by start tick then by core.
    pub entries: Vec<GanttEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a one-tick interval at `tick` and returns its index.
    pub(crate) fn open(&mut self, pid: Pid, tick: Tick, core_index: usize) -> usize {
        self.entries
            .push(GanttEntry::new(pid, tick, tick + 1, core_index));
        self.entries.len() - 1
    }

    /// Extends the interval at `index` by one tick.
    pub(crate) fn extend(&mut self, index: usize) {
        self.entries[index].end_tick += 1;
    }

    /// Latest end tick across all intervals.
    pub fn makespan(&self) -> Tick {
        self.entries.iter().map(|e| e.end_tick).max().unwrap_or(0)
    }

    /// Intervals executed by a given process.
    pub fn entries_for_process(&self, pid: Pid) -> Vec<&GanttEntry> {
        self.entries.iter().filter(|e| e.pid == pid).collect()
    }

    /// Intervals executed on a given core.
    pub fn entries_for_core(&self, core_index: usize) -> Vec<&GanttEntry> {
        self.entries
            .iter()
            .filter(|e| e.core_index == core_index)
            .collect()
    }

    /// Busy ticks per core.
    pub fn busy_ticks_by_core(&self) -> BTreeMap<usize, Tick> {
        let mut busy = BTreeMap::new();
        for e in &self.entries {
            *busy.entry(e.core_index).or_insert(0) += e.duration();
        }
        busy
    }

    /// Total executed ticks across all cores.
    pub fn busy_ticks(&self) -> Tick {
        self.entries.iter().map(GanttEntry::duration).sum()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no intervals.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
