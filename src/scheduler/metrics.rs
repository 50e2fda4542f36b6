//! Simulation performance metrics.
//!
//! Derives utilization, throughput and context-switch overhead from a
//! completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Effective ticks | total_ticks + switches × switch_cost |
//! | CPU utilization (%) | Σ burst / effective ticks × 100 |
//! | Throughput | processes / total_ticks |
//! | Switch overhead (%) | switches × switch_cost / effective ticks × 100 |
//! | Avg waiting time | mean(turnaround − burst) |
//! | Avg turnaround time | mean(completion − arrival) |
//!
//! Values are kept unrounded; the report layer rounds to two decimals.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::engine::SimulationOutcome;
use crate::models::{Pid, Tick};

/// Final figures for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival tick.
    pub arrival_time: Tick,
    /// CPU ticks required.
    pub burst_time: Tick,
    /// Tick of completion.
    pub completion_tick: Tick,
    /// Ticks spent ready but not running.
    pub waiting_time: Tick,
    /// Completion minus arrival.
    pub turnaround_time: Tick,
}

/// Aggregate performance indicators for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Number of processes.
    pub process_count: usize,
    /// Elapsed ticks, idle ticks included.
    pub total_ticks: Tick,
    /// Preemptions plus completions.
    pub context_switches: u64,
    /// Overhead ticks charged per switch.
    pub switch_cost: Tick,
    /// Elapsed ticks plus switch overhead.
    pub effective_ticks: Tick,
    /// Useful work over effective ticks (%).
    pub cpu_utilization_pct: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Switch overhead over effective ticks (%).
    pub context_switch_overhead_pct: f64,
    /// Mean waiting time (ticks).
    pub average_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub average_turnaround_time: f64,
    /// Per-process figures, in pid order.
    pub processes: Vec<ProcessMetrics>,
}

impl SimulationMetrics {
    /// Computes metrics from a finished run.
    ///
    /// An empty run (zero elapsed ticks) yields all-zero metrics.
    pub fn calculate(outcome: &SimulationOutcome, switch_cost: Tick) -> Self {
        let processes: Vec<ProcessMetrics> = outcome
            .processes
            .iter()
            .map(|p| ProcessMetrics {
                pid: p.pid,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                completion_tick: p.completion_tick.unwrap_or(0),
                waiting_time: p.waiting_time,
                turnaround_time: p.turnaround_time,
            })
            .collect();

        let process_count = processes.len();
        let total_ticks = outcome.total_ticks;
        let context_switches = outcome.context_switches;
        let overhead = context_switches.saturating_mul(switch_cost);
        let effective_ticks = total_ticks.saturating_add(overhead);

        if total_ticks == 0 {
            return Self {
                process_count,
                total_ticks,
                context_switches,
                switch_cost,
                effective_ticks,
                cpu_utilization_pct: 0.0,
                throughput: 0.0,
                context_switch_overhead_pct: 0.0,
                average_waiting_time: 0.0,
                average_turnaround_time: 0.0,
                processes,
            };
        }

        let total_burst: Tick = processes.iter().map(|p| p.burst_time).sum();
        let total_waiting: Tick = processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: Tick = processes.iter().map(|p| p.turnaround_time).sum();

        let (average_waiting_time, average_turnaround_time) = if process_count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting as f64 / process_count as f64,
                total_turnaround as f64 / process_count as f64,
            )
        };

        Self {
            process_count,
            total_ticks,
            context_switches,
            switch_cost,
            effective_ticks,
            cpu_utilization_pct: total_burst as f64 / effective_ticks as f64 * 100.0,
            throughput: process_count as f64 / total_ticks as f64,
            context_switch_overhead_pct: overhead as f64 / effective_ticks as f64 * 100.0,
            average_waiting_time,
            average_turnaround_time,
            processes,
        }
    }
}
