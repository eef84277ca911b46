//! Input validation for process workloads.
//!
//! Checks a process list before any scheduler runs. Detects:
//! - Empty or duplicate process names
//! - Non-positive burst times (a run could never make progress)
//! - Negative arrival times
//! - Workloads whose schedule horizon does not fit in `i64`
//!
//! Schedulers themselves do not validate; they assume well-formed input.

use crate::models::Process;
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty name.
    EmptyName,
    /// Two processes share the same name.
    DuplicateName,
    /// A process requires zero or negative execution time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Latest arrival plus total burst (or the per-process metric totals)
    /// would overflow `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process workload.
///
/// Checks:
/// 1. Every process has a non-empty name
/// 2. No two processes share a name
/// 3. Every burst time is positive
/// 4. No arrival time is negative
/// 5. The latest arrival plus the total burst fits in `i64`, and so does
///    that horizon summed over every process
///
/// An empty workload is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (idx, p) in processes.iter().enumerate() {
        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process at position {idx} has an empty name"),
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.name, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.name, p.arrival_time
                ),
            ));
        }
    }

    if let Some(message) = horizon_overflow(processes) {
        errors.push(ValidationError::new(ValidationErrorKind::TimeOverflow, message));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// No completion time can exceed `max(arrival) + Σ burst`, and no metric
/// total can exceed that horizon times the process count.
fn horizon_overflow(processes: &[Process]) -> Option<String> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    let total_burst = processes
        .iter()
        .map(|p| p.burst_time.max(0))
        .try_fold(0i64, i64::checked_add);

    let horizon = match total_burst.and_then(|b| latest_arrival.checked_add(b)) {
        Some(h) => h,
        None => {
            return Some(format!(
                "Latest arrival {latest_arrival} plus total burst time overflows the time range"
            ))
        }
    };

    let count = i64::try_from(processes.len()).unwrap_or(i64::MAX);
    if horizon.checked_mul(count).is_none() {
        return Some(format!(
            "Schedule horizon {horizon} across {count} processes overflows metric totals"
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload;

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&workload::sample()).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_name() {
        let procs = vec![Process::new("P1", 0, 1, 0), Process::new("P1", 2, 1, 0)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName && e.message.contains("P1")));
    }

    #[test]
    fn test_empty_name() {
        let procs = vec![Process::new("  ", 0, 1, 0)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyName);
    }

    #[test]
    fn test_non_positive_burst() {
        let procs = vec![Process::new("zero", 0, 0, 0), Process::new("neg", 0, -3, 0)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![Process::new("early", -1, 2, 0)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert_eq!(errors[0].to_string(), "Process 'early' has negative arrival time -1");
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate name + zero burst + negative arrival
        let procs = vec![Process::new("A", 0, 1, 0), Process::new("A", -2, 0, 0)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_far_arrival_overflows() {
        let procs = vec![Process::new("A", i64::MAX - 1, 5, 0)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_total_burst_overflows() {
        let procs = vec![
            Process::new("A", 0, i64::MAX / 2 + 1, 0),
            Process::new("B", 0, i64::MAX / 2 + 1, 0),
        ];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_metric_totals_overflow() {
        // Horizon fits, but summing per-process turnaround could not
        let procs = vec![
            Process::new("A", i64::MAX / 2, 1, 0),
            Process::new("B", i64::MAX / 2, 1, 0),
            Process::new("C", i64::MAX / 2, 1, 0),
        ];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_large_but_safe_horizon() {
        let procs = vec![Process::new("A", i64::MAX / 4, 10, 0), Process::new("B", 0, 10, 0)];
        assert!(validate_processes(&procs).is_ok());
    }
}
