//! Scheduling algorithm identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

/// The six supported CPU scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// First-Come, First-Served. Non-preemptive, FIFO ready queue.
    Fcfs,
    /// Shortest Job First. Non-preemptive, ordered by remaining time.
    Sjf,
    /// Shortest Remaining Time First. Preempts on a strictly shorter head.
    Srtf,
    /// Non-preemptive priority scheduling.
    Priority,
    /// Preemptive priority scheduling.
    PreemptivePriority,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in comparison-table order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
        Algorithm::PreemptivePriority,
        Algorithm::RoundRobin,
    ];

    /// Canonical identifier (e.g. `"PPRIORITY"`).
    pub fn code(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::Priority => "PRIORITY",
            Algorithm::PreemptivePriority => "PPRIORITY",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Human-readable name.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come, First-Served",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::Priority => "Priority (non-preemptive)",
            Algorithm::PreemptivePriority => "Priority (preemptive)",
            Algorithm::RoundRobin => "Round-Robin",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| SimError::UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(value: Algorithm) -> Self {
        value.code().to_string()
    }
}
