//! Input validation for simulation inputs.
//!
//! Checks structural integrity of task batches and simulation
//! parameters before running. Detects:
//! - Duplicate task IDs
//! - Deadlines earlier than arrival
//! - Negative or non-finite times
//! - Empty or inverted generation ranges
//! - Non-positive service time

use crate::models::Task;
use crate::scheduler::SimulationConfig;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task's deadline precedes its arrival time.
    DeadlineBeforeArrival,
    /// A time value is negative, NaN, or infinite.
    InvalidTime,
    /// A generation range is empty or inverted.
    InvalidRange,
    /// Service time is zero, negative, or not finite.
    NonPositiveServiceTime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a batch of tasks.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. Arrival times and deadlines are finite and non-negative
/// 3. `deadline >= arrival_time` when both are present
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut task_ids = HashSet::new();

    for task in tasks {
        if !task_ids.insert(task.task_id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.task_id()),
            ));
        }

        for (label, value) in [("arrival time", task.arrival_time()), ("deadline", task.deadline())] {
            if let Some(t) = value {
                if !t.is_finite() || t < 0.0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidTime,
                        format!("Task {} has invalid {label}: {t}", task.task_id()),
                    ));
                }
            }
        }

        if let (Some(arrival), Some(deadline)) = (task.arrival_time(), task.deadline()) {
            if deadline < arrival {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DeadlineBeforeArrival,
                    format!(
                        "Task {} has deadline {deadline} before arrival {arrival}",
                        task.task_id()
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates simulation parameters.
///
/// Checks:
/// 1. `service_time` is finite and positive
/// 2. `priority_min <= priority_max`
/// 3. `arrival_window` is finite and positive
/// 4. `0 <= slack_min < slack_max`, both finite
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if !(config.service_time.is_finite() && config.service_time > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveServiceTime,
            format!("Service time must be positive, got {}", config.service_time),
        ));
    }

    if config.priority_min > config.priority_max {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRange,
            format!(
                "Priority range is inverted: {}..={}",
                config.priority_min, config.priority_max
            ),
        ));
    }

    if !(config.arrival_window.is_finite() && config.arrival_window > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRange,
            format!("Arrival window must be positive, got {}", config.arrival_window),
        ));
    }

    let slack_ok = config.slack_min.is_finite()
        && config.slack_max.is_finite()
        && config.slack_min >= 0.0
        && config.slack_min < config.slack_max;
    if !slack_ok {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRange,
            format!(
                "Deadline slack range is invalid: {}..{}",
                config.slack_min, config.slack_max
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(1, 3).with_arrival_time(0.0).with_deadline(5.0),
            Task::new(2, 7).with_arrival_time(2.5).with_deadline(2.5),
            Task::new(3, 1),
        ]
    }

    #[test]
    fn test_valid_tasks() {
        assert!(validate_tasks(&sample_tasks()).is_ok());
    }

    #[test]
    fn test_duplicate_task_id() {
        let tasks = vec![Task::new(1, 1), Task::new(1, 2)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_deadline_before_arrival() {
        let tasks = vec![Task::new(1, 1).with_arrival_time(4.0).with_deadline(3.0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DeadlineBeforeArrival);
    }

    #[test]
    fn test_invalid_time() {
        let tasks = vec![
            Task::new(1, 1).with_arrival_time(-1.0),
            Task::new(2, 1).with_deadline(f64::NAN),
        ];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidTime)
                .count(),
            2
        );
    }

    #[test]
    fn test_default_config_valid() {
        assert!(validate_config(&SimulationConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_service_time() {
        let cfg = SimulationConfig::new().with_service_time(0.0);
        let errors = validate_config(&cfg).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveServiceTime));
    }

    #[test]
    fn test_multiple_config_errors() {
        let cfg = SimulationConfig::new()
            .with_priority_range(10, 1)
            .with_arrival_window(0.0)
            .with_slack_range(5.0, 5.0);
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidRange));
    }
}
