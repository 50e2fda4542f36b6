//! Error types for simulation setup.
//!
//! The engine itself cannot fail on normalized input; every error is raised
//! at the boundary where rows and configuration are turned into typed values.

use std::fmt;

use crate::validation::ValidationError;

/// Errors raised while preparing a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// One or more process rows or configuration values were rejected.
    InvalidInput(Vec<ValidationError>),
    /// The algorithm identifier is not one of the supported policies.
    UnknownAlgorithm(String),
    /// A workload document could not be read or parsed.
    Workload(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidInput(errors) => {
                write!(f, "invalid input ({} problem(s))", errors.len())?;
                for e in errors {
                    write!(f, "\n  - {}", e.message)?;
                }
                Ok(())
            }
            SimError::UnknownAlgorithm(name) => write!(
                f,
                "unknown scheduling algorithm '{name}' (expected one of FCFS, SJF, SRTF, PRIORITY, PPRIORITY, RR)"
            ),
            SimError::Workload(reason) => write!(f, "invalid workload: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}

impl From<Vec<ValidationError>> for SimError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimError::InvalidInput(errors)
    }
}
