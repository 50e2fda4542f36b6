//! Input validation and normalization.
//!
//! Checks raw process rows and run configuration before simulation.
//! Detects:
//! - Negative arrival times
//! - Non-positive burst times (the engine would never finish such a process)
//! - Negative or out-of-range priorities
//! - Core counts below one
//!
//! All rows are checked; every problem is reported, not just the first.

use crate::error::SimError;
use crate::models::{Process, ProcessRow};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Priority is below zero.
    NegativePriority,
    /// A value does not fit the simulator's numeric range.
    ValueOutOfRange,
    /// Core count is zero.
    InvalidCoreCount,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates raw process rows.
///
/// Rows are identified by their 1-based pid (`P1`, `P2`, ...).
///
/// # Returns
/// `Ok(())` if all rows are well-formed, `Err(errors)` with all detected issues.
pub fn validate_rows(rows: &[ProcessRow]) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let pid = i + 1;

        if row.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{pid}: arrival time {} is negative", row.arrival_time),
            ));
        }

        if row.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{pid}: burst time {} must be at least 1", row.burst_time),
            ));
        }

        if row.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("P{pid}: priority {} is negative", row.priority),
            ));
        } else if u32::try_from(row.priority).is_err() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ValueOutOfRange,
                format!("P{pid}: priority {} is too large", row.priority),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates process records, including ones built without [`normalize`].
///
/// Only the burst time can be out of range once a row is a [`Process`];
/// run-state fields are reset by the engine before every run.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let errors: Vec<ValidationError> = processes
        .iter()
        .filter(|p| p.burst_time == 0)
        .map(|p| {
            ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{}: burst time 0 must be at least 1", p.pid),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the number of logical cores.
pub fn validate_core_count(core_count: usize) -> ValidationResult {
    if core_count == 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidCoreCount,
            "core count must be at least 1",
        )]);
    }
    Ok(())
}

/// Normalizes raw rows into process records with reset run-state.
///
/// Pids are assigned by 1-based input order. Malformed rows are rejected
/// as a whole; no partial process list is returned.
///
/// # Example
/// ```
/// use u_cpusched::models::ProcessRow;
/// use u_cpusched::validation::normalize;
///
/// let processes = normalize(&[ProcessRow::new(0, 5, 1), ProcessRow::new(2, 3, 0)]).unwrap();
/// assert_eq!(processes[1].pid, 2);
/// assert_eq!(processes[1].remaining_time, 3);
///
/// assert!(normalize(&[ProcessRow::new(0, 0, 0)]).is_err());
/// ```
pub fn normalize(rows: &[ProcessRow]) -> Result<Vec<Process>, SimError> {
    validate_rows(rows)?;

    Ok(rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            // Ranges were checked above.
            Process::new(
                i + 1,
                row.arrival_time as u64,
                row.burst_time as u64,
                row.priority as u32,
            )
        })
        .collect())
}

/// Interprets a raw quantum value.
///
/// Absent, zero and negative quanta mean "unbounded", which disables
/// quantum-based preemption.
pub fn normalize_quantum(raw: Option<i64>) -> Option<u64> {
    raw.filter(|&q| q > 0).map(|q| q as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rows() {
        let rows = vec![ProcessRow::new(0, 5, 1), ProcessRow::new(3, 1, 0)];
        assert!(validate_rows(&rows).is_ok());
        assert!(validate_rows(&[]).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_rows(&[ProcessRow::new(-1, 5, 0)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].message.starts_with("P1"));
    }

    #[test]
    fn test_non_positive_burst() {
        let rows = vec![ProcessRow::new(0, 2, 0), ProcessRow::new(0, 0, 0)];
        let errors = validate_rows(&rows).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
        assert!(errors[0].message.starts_with("P2"));

        let errors = validate_rows(&[ProcessRow::new(0, -4, 0)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_priority_range() {
        let errors = validate_rows(&[ProcessRow::new(0, 1, -2)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativePriority);

        let errors = validate_rows(&[ProcessRow::new(0, 1, i64::from(u32::MAX) + 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ValueOutOfRange);
    }

    #[test]
    fn test_multiple_errors() {
        let rows = vec![ProcessRow::new(-1, 0, -1), ProcessRow::new(0, 0, 0)];
        let errors = validate_rows(&rows).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_core_count() {
        assert!(validate_core_count(1).is_ok());
        let errors = validate_core_count(0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCoreCount);
    }

    #[test]
    fn test_normalize_assigns_pids_in_order() {
        let rows = vec![
            ProcessRow::new(4, 2, 3),
            ProcessRow::new(0, 7, 1),
            ProcessRow::new(1, 1, 0),
        ];
        let processes = normalize(&rows).unwrap();
        let pids: Vec<_> = processes.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1, 2, 3]);
        assert_eq!(processes[0], Process::new(1, 4, 2, 3));
        assert!(processes.iter().all(|p| !p.admitted && !p.done));
    }

    #[test]
    fn test_normalize_rejects_malformed() {
        let err = normalize(&[ProcessRow::new(0, 1, 0), ProcessRow::new(0, 0, 0)]).unwrap_err();
        match err {
            SimError::InvalidInput(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_processes() {
        let mut processes = normalize(&[ProcessRow::new(0, 2, 0), ProcessRow::new(1, 3, 0)]).unwrap();
        assert!(validate_processes(&processes).is_ok());

        processes[1].burst_time = 0;
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
        assert!(errors[0].message.starts_with("P2"));
    }

    #[test]
    fn test_normalize_quantum() {
        assert_eq!(normalize_quantum(None), None);
        assert_eq!(normalize_quantum(Some(0)), None);
        assert_eq!(normalize_quantum(Some(-3)), None);
        assert_eq!(normalize_quantum(Some(4)), Some(4));
    }
}
