//! Schedule (solution) model.
//!
//! A schedule lists the vehicle each placed task was assigned to, in the
//! order the scheduler processed them, together with the tasks that could
//! not be placed before their deadline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::TaskId;

/// The result of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Task-vehicle assignments in processing order.
    pub assignments: Vec<Assignment>,
    /// Tasks no vehicle could finish in time, in processing order.
    pub unassigned: Vec<TaskId>,
}

/// A task-vehicle assignment.
///
/// Records that a task occupies a vehicle during `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned task ID.
    pub task_id: TaskId,
    /// Zero-based vehicle index.
    pub vehicle: usize,
    /// Vehicle clock when the task was placed.
    pub start: i64,
    /// Vehicle clock after the task.
    pub end: i64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(task_id: TaskId, vehicle: usize, start: i64, end: i64) -> Self {
        Self {
            task_id,
            vehicle,
            start,
            end,
        }
    }

    /// Time the task occupies the vehicle.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Records a task that could not be placed.
    pub fn add_unassigned(&mut self, task_id: TaskId) {
        self.unassigned.push(task_id);
    }

    /// `(task_id, vehicle)` pairs in processing order.
    pub fn pairs(&self) -> Vec<(TaskId, usize)> {
        self.assignments
            .iter()
            .map(|a| (a.task_id, a.vehicle))
            .collect()
    }

    /// Whether every task was placed.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Makespan: latest end time across all assignments.
    pub fn makespan(&self) -> i64 {
        self.assignments.iter().map(|a| a.end).max().unwrap_or(0)
    }

    /// Finds the assignment for a given task.
    pub fn assignment_for_task(&self, task_id: TaskId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.task_id == task_id)
    }

    /// Vehicle index a task was assigned to.
    pub fn vehicle_for_task(&self, task_id: TaskId) -> Option<usize> {
        self.assignment_for_task(task_id).map(|a| a.vehicle)
    }

    /// Returns all assignments for a given vehicle, in placement order.
    pub fn assignments_for_vehicle(&self, vehicle: usize) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.vehicle == vehicle)
            .collect()
    }

    /// Committed time per vehicle that received at least one task.
    pub fn committed_by_vehicle(&self) -> BTreeMap<usize, i64> {
        let mut committed = BTreeMap::new();
        for a in &self.assignments {
            *committed.entry(a.vehicle).or_insert(0) += a.duration();
        }
        committed
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
