//! Scheduling session.
//!
//! A session owns what a front end accumulates while the user enters
//! deliveries: the task list, the running ID counter, and the fleet
//! configuration. The scheduler itself stays stateless; the session passes
//! its tasks in on every call.

use tracing::{debug, info};

use crate::config::SchedulerConfig;
use crate::models::{Schedule, Task, TaskId};
use crate::scheduler::GreedyScheduler;
use crate::validation::{parse_task_input, ValidationError};

/// Task list and ID counter for one user session.
///
/// # Example
///
/// ```
/// use delivery_schedule::config::SchedulerConfig;
/// use delivery_schedule::session::SchedulerSession;
///
/// let mut session = SchedulerSession::new(SchedulerConfig::new(1));
/// session.add_task(3, 3).unwrap();
/// session.add_task(3, 3).unwrap();
///
/// let schedule = session.schedule();
/// let rows = session.rows(&schedule);
/// assert_eq!(rows[0].vehicle_label(), "Vehicle 1");
/// assert_eq!(rows[1].vehicle_label(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchedulerSession {
    config: SchedulerConfig,
    scheduler: GreedyScheduler,
    tasks: Vec<Task>,
    last_task_id: TaskId,
}

/// One line of the task table shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Task ID.
    pub id: TaskId,
    /// Processing time.
    pub processing_time: i64,
    /// Deadline.
    pub deadline: i64,
    /// Profit of the task.
    pub profit: i64,
    /// Zero-based vehicle index, `None` if unassigned.
    pub vehicle: Option<usize>,
}

impl TaskRow {
    /// Profit formatted in rupees, e.g. `₨50`.
    pub fn profit_label(&self) -> String {
        format!("₨{}", self.profit)
    }

    /// One-based vehicle label (`Vehicle 3`), empty when unassigned.
    pub fn vehicle_label(&self) -> String {
        self.vehicle
            .map(|v| format!("Vehicle {}", v + 1))
            .unwrap_or_default()
    }
}

impl SchedulerSession {
    /// Creates an empty session.
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            scheduler: GreedyScheduler::new(),
            tasks: Vec::new(),
            last_task_id: 0,
        }
    }

    /// Replaces the scheduler used by [`schedule`](Self::schedule).
    pub fn with_scheduler(mut self, scheduler: GreedyScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Validates the inputs and adds a task with the next ID.
    ///
    /// A rejected task does not consume an ID.
    pub fn add_task(
        &mut self,
        processing_time: i64,
        deadline: i64,
    ) -> Result<TaskId, ValidationError> {
        let id = self.last_task_id + 1;
        let task = Task::new(id, processing_time, deadline)?;

        debug!(id, processing_time, deadline, profit = task.profit(), "task added");
        self.tasks.push(task);
        self.last_task_id = id;
        Ok(id)
    }

    /// Parses text fields as integers and adds the task.
    pub fn add_task_from_input(
        &mut self,
        processing_time: &str,
        deadline: &str,
    ) -> Result<TaskId, ValidationError> {
        let (processing_time, deadline) = parse_task_input(processing_time, deadline)?;
        self.add_task(processing_time, deadline)
    }

    /// Tasks in the order they were added.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task has been added.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// ID of the most recently added task (0 before the first).
    pub fn last_task_id(&self) -> TaskId {
        self.last_task_id
    }

    /// Session configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules every task on the configured fleet.
    pub fn schedule(&self) -> Schedule {
        let schedule = self.scheduler.schedule(&self.tasks, self.config.num_vehicles);
        info!(
            tasks = self.tasks.len(),
            vehicles = self.config.num_vehicles,
            assigned = schedule.assignment_count(),
            "schedule computed"
        );
        schedule
    }

    /// Table rows in insertion order with the vehicle from `schedule`.
    pub fn rows(&self, schedule: &Schedule) -> Vec<TaskRow> {
        self.tasks
            .iter()
            .map(|task| TaskRow {
                id: task.id(),
                processing_time: task.processing_time(),
                deadline: task.deadline(),
                profit: task.profit(),
                vehicle: schedule.vehicle_for_task(task.id()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_ids_increase_monotonically() {
        let mut session = SchedulerSession::default();
        assert_eq!(session.add_task(1, 2), Ok(1));
        assert_eq!(session.add_task(2, 4), Ok(2));
        assert_eq!(session.add_task(3, 6), Ok(3));
        assert_eq!(session.last_task_id(), 3);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_rejected_task_keeps_counter() {
        let mut session = SchedulerSession::default();
        session.add_task(1, 2).unwrap();

        let err = session.add_task(5, 2).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DeadlineBeforeProcessing);
        let err = session.add_task_from_input("x", "2").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NotAnInteger);

        assert_eq!(session.add_task(1, 1), Ok(2));
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_add_from_input() {
        let mut session = SchedulerSession::default();
        let id = session.add_task_from_input(" 4", "9 ").unwrap();
        let task = &session.tasks()[0];
        assert_eq!(id, 1);
        assert_eq!(task.processing_time(), 4);
        assert_eq!(task.deadline(), 9);
        assert_eq!(task.profit(), 40);

        let err = session.add_task_from_input("0", "0").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositive);
    }

    #[test]
    fn test_default_fleet_size() {
        let session = SchedulerSession::default();
        assert!(session.is_empty());
        assert_eq!(session.config().num_vehicles, 30);
        assert!(session.schedule().assignments.is_empty());
    }

    #[test]
    fn test_rows_follow_insertion_order() {
        let mut session = SchedulerSession::new(SchedulerConfig::new(1));
        session.add_task(2, 20).unwrap();
        session.add_task(2, 2).unwrap();
        session.add_task(5, 5).unwrap();

        let schedule = session.schedule();
        // Task 2 runs first (deadline 2), task 3 then misses its deadline of 5
        assert_eq!(schedule.pairs(), vec![(2, 0), (1, 0)]);

        let rows = session.rows(&schedule);
        let ids: Vec<TaskId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(rows[0].vehicle, Some(0));
        assert_eq!(rows[2].vehicle, None);
        assert_eq!(rows[0].profit_label(), "₨20");
        assert_eq!(rows[1].vehicle_label(), "Vehicle 1");
        assert_eq!(rows[2].vehicle_label(), "");
    }

    #[test]
    fn test_schedule_does_not_reorder_tasks() {
        let mut session = SchedulerSession::default();
        session.add_task(1, 9).unwrap();
        session.add_task(1, 1).unwrap();
        let _ = session.schedule();

        let ids: Vec<TaskId> = session.tasks().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
