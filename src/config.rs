//! Run configuration.
//!
//! A [`SimulationConfig`] carries everything that is fixed for one run:
//! algorithm, logical core count, quantum and the per-switch overhead used
//! in metrics. It is explicit and run-scoped; nothing is read from global
//! state.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::models::{Algorithm, Tick};
use crate::validation::validate_core_count;

/// Default ticks charged per context switch in metrics.
pub const DEFAULT_SWITCH_COST: Tick = 1;

/// Ticks without a boost after which a ready process's priority improves.
pub const AGING_THRESHOLD: u32 = 5;

/// Configuration for a single simulation run.
///
/// # Example
/// ```
/// use u_cpusched::config::SimulationConfig;
/// use u_cpusched::models::Algorithm;
///
/// let config = SimulationConfig::new(Algorithm::RoundRobin)
///     .with_cores(2)
///     .with_quantum(Some(3));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scheduling policy.
    pub algorithm: Algorithm,
    /// Number of logical cores (>= 1).
    #[serde(default = "default_core_count")]
    pub core_count: usize,
    /// Round-Robin quantum. `None` = unbounded.
    #[serde(default)]
    pub quantum: Option<Tick>,
    /// Overhead ticks per context switch, used only by metrics.
    #[serde(default = "default_switch_cost")]
    pub switch_cost: Tick,
}

fn default_core_count() -> usize {
    1
}

fn default_switch_cost() -> Tick {
    DEFAULT_SWITCH_COST
}

impl SimulationConfig {
    /// Creates a single-core configuration without a quantum.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            core_count: default_core_count(),
            quantum: None,
            switch_cost: DEFAULT_SWITCH_COST,
        }
    }

    /// Sets the number of logical cores.
    pub fn with_cores(mut self, core_count: usize) -> Self {
        self.core_count = core_count;
        self
    }

    /// Sets the quantum. Zero is treated as unbounded.
    pub fn with_quantum(mut self, quantum: Option<Tick>) -> Self {
        self.quantum = quantum.filter(|&q| q > 0);
        self
    }

    /// Sets the per-switch overhead.
    pub fn with_switch_cost(mut self, switch_cost: Tick) -> Self {
        self.switch_cost = switch_cost;
        self
    }

    /// Same configuration with a different algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), SimError> {
        validate_core_count(self.core_count)?;
        Ok(())
    }

    /// Quantum with zero normalized to unbounded.
    pub fn effective_quantum(&self) -> Option<Tick> {
        self.quantum.filter(|&q| q > 0)
    }
}
