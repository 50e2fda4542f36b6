//! Side-by-side comparison of all scheduling algorithms.
//!
//! Each algorithm runs against its own fresh copy of the process set, so no
//! run can observe another's aging, remaining times or completion flags.
//! Only aggregate figures are kept; timelines are dropped.

use log::debug;
use serde::{Deserialize, Serialize};

use super::engine::SchedulerEngine;
use super::metrics::SimulationMetrics;
use crate::config::{SimulationConfig, DEFAULT_SWITCH_COST};
use crate::error::SimError;
use crate::models::{Algorithm, Process, Tick};

/// One algorithm's summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Algorithm.
    pub algorithm: Algorithm,
    /// Mean waiting time (ticks).
    pub average_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub average_turnaround_time: f64,
    /// CPU utilization (%).
    pub cpu_utilization_pct: f64,
}

/// Summary rows in [`Algorithm::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    /// One row per algorithm.
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Row for a given algorithm.
    pub fn row(&self, algorithm: Algorithm) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.algorithm == algorithm)
    }

    /// Algorithm with the lowest mean waiting time (first wins ties).
    pub fn best_waiting(&self) -> Option<Algorithm> {
        self.best_by(|r| r.average_waiting_time)
    }

    /// Algorithm with the lowest mean turnaround time (first wins ties).
    pub fn best_turnaround(&self) -> Option<Algorithm> {
        self.best_by(|r| r.average_turnaround_time)
    }

    fn best_by(&self, key: impl Fn(&ComparisonRow) -> f64) -> Option<Algorithm> {
        self.rows
            .iter()
            .fold(None::<&ComparisonRow>, |best, r| match best {
                Some(b) if key(b) <= key(r) => Some(b),
                _ => Some(r),
            })
            .map(|r| r.algorithm)
    }
}

/// Runs every algorithm over the same process set.
///
/// # Example
/// ```
/// use u_cpusched::models::{Algorithm, ProcessRow};
/// use u_cpusched::scheduler::ComparisonRunner;
/// use u_cpusched::validation::normalize;
///
/// let processes = normalize(&[ProcessRow::new(0, 6, 2), ProcessRow::new(1, 2, 0)]).unwrap();
/// let table = ComparisonRunner::new(1).with_quantum(Some(2)).run(&processes).unwrap();
/// assert_eq!(table.rows.len(), 6);
/// assert_eq!(table.rows[0].algorithm, Algorithm::Fcfs);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRunner {
    core_count: usize,
    quantum: Option<Tick>,
    switch_cost: Tick,
}

impl ComparisonRunner {
    /// Creates a runner for `core_count` cores, no quantum, default switch cost.
    pub fn new(core_count: usize) -> Self {
        Self {
            core_count,
            quantum: None,
            switch_cost: DEFAULT_SWITCH_COST,
        }
    }

    /// Uses the cores, quantum and switch cost of `config`; its algorithm is ignored.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            core_count: config.core_count,
            quantum: config.effective_quantum(),
            switch_cost: config.switch_cost,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: Option<Tick>) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the per-switch overhead.
    pub fn with_switch_cost(mut self, switch_cost: Tick) -> Self {
        self.switch_cost = switch_cost;
        self
    }

    /// Runs all six algorithms and summarizes each.
    pub fn run(&self, processes: &[Process]) -> Result<ComparisonTable, SimError> {
        let mut rows = Vec::with_capacity(Algorithm::ALL.len());
        let base = SimulationConfig::new(Algorithm::Fcfs)
            .with_cores(self.core_count)
            .with_quantum(self.quantum)
            .with_switch_cost(self.switch_cost);

        for algorithm in Algorithm::ALL {
            let engine = SchedulerEngine::new(base.clone().with_algorithm(algorithm))?;

            let outcome = engine.simulate(processes.to_vec())?;
            let metrics = SimulationMetrics::calculate(&outcome, self.switch_cost);

            debug!(
                "{}: avg wt {:.2}, avg tat {:.2}, util {:.2}%",
                algorithm,
                metrics.average_waiting_time,
                metrics.average_turnaround_time,
                metrics.cpu_utilization_pct
            );

            rows.push(ComparisonRow {
                algorithm,
                average_waiting_time: metrics.average_waiting_time,
                average_turnaround_time: metrics.average_turnaround_time,
                cpu_utilization_pct: metrics.cpu_utilization_pct,
            });
        }

        Ok(ComparisonTable { rows })
    }
}
