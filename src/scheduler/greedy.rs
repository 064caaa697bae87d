//! Greedy first-fit delivery scheduler.
//!
//! # Algorithm
//!
//! 1. Order tasks by the rule engine (default: profit density descending,
//!    deadline ascending, task ID ascending).
//! 2. Start every vehicle clock at 0.
//! 3. Offer each task to vehicles in index order and place it on the first
//!    vehicle whose clock plus the processing time still meets the deadline.
//! 4. Tasks no vehicle can take are left out of the assignment list.
//!
//! No backtracking: a placement is never revisited.
//!
//! # Complexity
//! O(n log n + n * m) where n=tasks, m=vehicles.

use tracing::{debug, trace};

use super::fleet::Fleet;
use crate::dispatching::RuleEngine;
use crate::models::{Assignment, Schedule, Task, TaskId};

/// Greedy first-fit scheduler over a fleet of identical vehicles.
///
/// # Example
///
/// ```
/// use delivery_schedule::models::Task;
/// use delivery_schedule::scheduler::GreedyScheduler;
///
/// let tasks = vec![Task::new(1, 3, 3).unwrap(), Task::new(2, 3, 3).unwrap()];
/// let schedule = GreedyScheduler::new().schedule(&tasks, 1);
///
/// assert_eq!(schedule.pairs(), vec![(1, 0)]);
/// assert_eq!(schedule.unassigned, vec![2]);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    rule_engine: RuleEngine,
}

impl GreedyScheduler {
    /// Creates a scheduler with the profit-density ordering.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::profit_density_first(),
        }
    }

    /// Replaces the task ordering.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Schedules tasks on `num_vehicles` identical vehicles.
    ///
    /// Assignments are listed in processing order, not input order.
    pub fn schedule(&self, tasks: &[Task], num_vehicles: usize) -> Schedule {
        let mut schedule = Schedule::new();
        let mut fleet = Fleet::new(num_vehicles);

        for idx in self.rule_engine.sort_indices(tasks) {
            let task = &tasks[idx];

            match fleet.first_fit(task) {
                Some(vehicle) => {
                    let (start, end) = fleet.commit(vehicle, task);
                    trace!(task = task.id(), vehicle, start, end, "placed task");
                    schedule.add_assignment(Assignment::new(task.id(), vehicle, start, end));
                }
                None => {
                    debug!(
                        task = task.id(),
                        processing_time = task.processing_time(),
                        deadline = task.deadline(),
                        "no vehicle can meet deadline, task left unassigned"
                    );
                    schedule.add_unassigned(task.id());
                }
            }
        }

        debug!(
            tasks = tasks.len(),
            vehicles = num_vehicles,
            assigned = schedule.assignment_count(),
            unassigned = schedule.unassigned.len(),
            "scheduling finished"
        );

        schedule
    }
}

impl Default for GreedyScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Assigns tasks to vehicles and returns `(task_id, vehicle_index)` pairs.
///
/// Pure and deterministic. Unplaceable tasks are omitted. An empty task
/// list or `num_vehicles == 0` yields an empty result.
///
/// ```
/// use delivery_schedule::models::Task;
/// use delivery_schedule::scheduler::schedule;
///
/// let tasks = vec![Task::new(1, 5, 5).unwrap(), Task::new(2, 5, 10).unwrap()];
/// assert_eq!(schedule(&tasks, 1), vec![(1, 0), (2, 0)]);
/// ```
pub fn schedule(tasks: &[Task], num_vehicles: usize) -> Vec<(TaskId, usize)> {
    GreedyScheduler::new().schedule(tasks, num_vehicles).pairs()
}
