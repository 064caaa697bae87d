//! Input validation for delivery tasks.
//!
//! Checks raw user input before a [`Task`] is constructed and checks a
//! task collection before it is scheduled. Detects:
//! - Input that is not an integer
//! - Non-positive processing times or deadlines
//! - Deadlines shorter than the processing time
//! - Processing times whose profit does not fit in an `i64`
//! - Duplicate task IDs

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Task, PROFIT_PER_TIME_UNIT};

/// Validation result for a task collection.
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
    /// Input could not be parsed as an integer.
    NotAnInteger,
    /// Processing time or deadline is zero or negative.
    NonPositive,
    /// Deadline is earlier than the processing time.
    DeadlineBeforeProcessing,
    /// Processing time is too large for its profit to be represented.
    TooLarge,
    /// Two tasks share the same ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks the numeric preconditions of a task.
///
/// Both values must be positive and `deadline >= processing_time`, and
/// `processing_time * PROFIT_PER_TIME_UNIT` must not overflow.
pub fn validate_task_input(processing_time: i64, deadline: i64) -> Result<(), ValidationError> {
    if processing_time <= 0 || deadline <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositive,
            format!(
                "Processing time and deadline must be positive \
                 (got {processing_time} and {deadline})."
            ),
        ));
    }

    if deadline < processing_time {
        return Err(ValidationError::new(
            ValidationErrorKind::DeadlineBeforeProcessing,
            format!(
                "Deadline ({deadline}) cannot be less than processing time ({processing_time})."
            ),
        ));
    }

    if processing_time > i64::MAX / PROFIT_PER_TIME_UNIT {
        return Err(ValidationError::new(
            ValidationErrorKind::TooLarge,
            format!(
                "Processing time ({processing_time}) exceeds the maximum of {}.",
                i64::MAX / PROFIT_PER_TIME_UNIT
            ),
        ));
    }

    Ok(())
}

/// Parses processing time and deadline from text fields and validates them.
///
/// Surrounding whitespace is ignored.
pub fn parse_task_input(
    processing_time: &str,
    deadline: &str,
) -> Result<(i64, i64), ValidationError> {
    let parse = |raw: &str| {
        raw.trim().parse::<i64>().map_err(|_| {
            ValidationError::new(
                ValidationErrorKind::NotAnInteger,
                "Please enter valid integer values.",
            )
        })
    };

    let processing_time = parse(processing_time)?;
    let deadline = parse(deadline)?;
    validate_task_input(processing_time, deadline)?;
    Ok((processing_time, deadline))
}

/// Validates a task collection before scheduling.
///
/// Individual tasks are valid by construction, so this only checks
/// properties of the collection as a whole.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for task in tasks {
        if !seen.insert(task.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
