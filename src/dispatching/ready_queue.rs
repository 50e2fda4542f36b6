//! Ready queue of admitted, unfinished processes.

use std::collections::VecDeque;

use super::DispatchingRule;
use crate::models::Process;

/// FIFO queue of indices into the run's process table.
///
/// Holding indices rather than references lets the engine mutate the
/// process table while the queue is alive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadyQueue {
    slots: VecDeque<usize>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process index at the tail.
    pub fn push_back(&mut self, index: usize) {
        debug_assert!(!self.contains(index), "process index {index} queued twice");
        self.slots.push_back(index);
    }

    /// Removes and returns the head.
    pub fn pop_front(&mut self) -> Option<usize> {
        self.slots.pop_front()
    }

    /// Head of the queue without removing it.
    pub fn front(&self) -> Option<usize> {
        self.slots.front().copied()
    }

    /// Whether the queue holds `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains(&index)
    }

    /// Queued indices, head first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }

    /// Number of queued processes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stable-sorts the queue by `rule` (lowest score first).
    ///
    /// Processes with equal scores keep their relative queue order.
    pub fn reorder(&mut self, rule: &dyn DispatchingRule, processes: &[Process]) {
        self.slots
            .make_contiguous()
            .sort_by_key(|&i| rule.evaluate(&processes[i]));
    }
}
