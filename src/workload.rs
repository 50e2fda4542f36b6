//! Workload documents and random workload generation.
//!
//! A workload is a list of process rows plus optional run settings, stored
//! as JSON:
//!
//! ```json
//! {
//!   "processes": [
//!     { "arrival_time": 0, "burst_time": 5, "priority": 1 },
//!     { "arrival_time": 1, "burst_time": 3 }
//!   ],
//!   "algorithm": "RR",
//!   "cores": 2,
//!   "quantum": 2
//! }
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::{SimulationConfig, DEFAULT_SWITCH_COST};
use crate::error::SimError;
use crate::models::{Algorithm, Process, ProcessRow, Tick};
use crate::validation::{normalize, normalize_quantum};

/// A workload document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Raw process rows, in pid order.
    pub processes: Vec<ProcessRow>,
    /// Preferred algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    /// Preferred core count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores: Option<usize>,
    /// Raw quantum; zero or negative means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Overhead ticks per context switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch_cost: Option<Tick>,
}

impl Workload {
    /// Creates a workload from rows with no run settings.
    pub fn new(processes: Vec<ProcessRow>) -> Self {
        Self {
            processes,
            ..Default::default()
        }
    }

    /// Parses a JSON workload document.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::Workload(e.to_string()))
    }

    /// Reads and parses a JSON workload file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| SimError::Workload(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Validates and normalizes the process rows.
    pub fn normalized(&self) -> Result<Vec<Process>, SimError> {
        normalize(&self.processes)
    }

    /// Builds a run configuration from the document's settings.
    ///
    /// `fallback` is used when the document names no algorithm.
    pub fn config(&self, fallback: Algorithm) -> Result<SimulationConfig, SimError> {
        let config = SimulationConfig::new(self.algorithm.unwrap_or(fallback))
            .with_cores(self.cores.unwrap_or(1))
            .with_quantum(normalize_quantum(self.quantum))
            .with_switch_cost(self.switch_cost.unwrap_or(DEFAULT_SWITCH_COST));
        config.validate()?;
        Ok(config)
    }
}

/// Parameters for random workload generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadShape {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival tick (inclusive).
    pub max_arrival: i64,
    /// Shortest burst (inclusive, >= 1).
    pub min_burst: i64,
    /// Longest burst (inclusive).
    pub max_burst: i64,
    /// Largest priority value (inclusive).
    pub max_priority: i64,
}

impl Default for WorkloadShape {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 8,
            max_priority: 5,
        }
    }
}

/// Generates a reproducible random workload.
///
/// The same shape and seed always produce the same rows. Bounds are
/// clamped so every row passes validation.
///
/// # Example
/// ```
/// use u_cpusched::workload::{generate, WorkloadShape};
///
/// let shape = WorkloadShape { count: 4, ..Default::default() };
/// assert_eq!(generate(&shape, 7), generate(&shape, 7));
/// assert_eq!(generate(&shape, 7).len(), 4);
/// ```
pub fn generate(shape: &WorkloadShape, seed: u64) -> Vec<ProcessRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_arrival = shape.max_arrival.max(0);
    let min_burst = shape.min_burst.max(1);
    let max_burst = shape.max_burst.max(min_burst);
    let max_priority = shape.max_priority.max(0);

    (0..shape.count)
        .map(|_| {
            ProcessRow::new(
                rng.random_range(0..=max_arrival),
                rng.random_range(min_burst..=max_burst),
                rng.random_range(0..=max_priority),
            )
        })
        .collect()
}
