//! Delivery task model.
//!
//! A task is one delivery that occupies a vehicle for its processing time
//! and must be finished by its deadline. Profit and profit density are
//! derived once at construction.
//!
//! # Time Representation
//! Processing times and deadlines are integer time units (hours in the
//! reference fleet) measured from the moment scheduling starts (t=0).

use serde::{Deserialize, Serialize};

use crate::validation::{validate_task_input, ValidationError};

/// Task identifier, assigned by the caller.
pub type TaskId = u64;

/// Profit earned per unit of processing time.
pub const PROFIT_PER_TIME_UNIT: i64 = 10;

/// A delivery task to be scheduled.
///
/// Immutable once constructed: every field is private and the only way to
/// obtain a `Task` is [`Task::new`] (or deserialization, which runs the same
/// checks).
///
/// # Example
/// ```
/// use delivery_schedule::models::Task;
///
/// let task = Task::new(1, 4, 12).unwrap();
/// assert_eq!(task.profit(), 40);
/// assert_eq!(task.profit_in_rupees(), "₨40");
/// assert!(Task::new(2, 5, 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaskInput")]
pub struct Task {
    id: TaskId,
    processing_time: i64,
    deadline: i64,
    profit: i64,
    profit_density: f64,
}

/// Raw task fields as they arrive from outside the crate.
#[derive(Debug, Clone, Copy, Deserialize)]
struct TaskInput {
    id: TaskId,
    processing_time: i64,
    deadline: i64,
}

impl TryFrom<TaskInput> for Task {
    type Error = ValidationError;

    fn try_from(input: TaskInput) -> Result<Self, Self::Error> {
        Task::new(input.id, input.processing_time, input.deadline)
    }
}

impl Task {
    /// Creates a task after checking its inputs.
    ///
    /// Fails when `processing_time` or `deadline` is not positive, when
    /// the deadline is earlier than the processing time, or when the profit
    /// would not fit in an `i64`.
    pub fn new(id: TaskId, processing_time: i64, deadline: i64) -> Result<Self, ValidationError> {
        validate_task_input(processing_time, deadline)?;

        let profit = processing_time * PROFIT_PER_TIME_UNIT;
        Ok(Self {
            id,
            processing_time,
            deadline,
            profit,
            profit_density: profit as f64 / processing_time as f64,
        })
    }

    /// Task identifier.
    #[inline]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Time units the task occupies a vehicle.
    #[inline]
    pub fn processing_time(&self) -> i64 {
        self.processing_time
    }

    /// Latest completion time.
    #[inline]
    pub fn deadline(&self) -> i64 {
        self.deadline
    }

    /// Profit earned by completing the task.
    #[inline]
    pub fn profit(&self) -> i64 {
        self.profit
    }

    /// Profit per unit of processing time.
    ///
    /// Profit is a fixed multiple of processing time, so this is
    /// [`PROFIT_PER_TIME_UNIT`] for every task.
    #[inline]
    pub fn profit_density(&self) -> f64 {
        self.profit_density
    }

    /// Slack between the deadline and the processing time.
    #[inline]
    pub fn slack(&self) -> i64 {
        self.deadline - self.processing_time
    }

    /// Profit formatted in rupees, e.g. `₨50`.
    pub fn profit_in_rupees(&self) -> String {
        format!("₨{}", self.profit)
    }
}
