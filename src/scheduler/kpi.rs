//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest vehicle clock |
//! | Fill Rate | Fraction of tasks placed |
//! | Total Profit | Profit of placed tasks |
//! | Vehicles Used | Vehicles with at least one task |
//! | Avg Utilization | Mean committed time / makespan over used vehicles |
//! | Avg Slack | Mean (deadline - end) of placed tasks |
//!
//! Tardiness is not reported: the scheduler never places a task past its
//! deadline.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Schedule, Task, TaskId};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Number of tasks placed on a vehicle.
    pub scheduled_count: usize,
    /// Number of tasks left out.
    pub unscheduled_count: usize,
    /// Fraction of tasks placed (0.0..1.0).
    pub fill_rate: f64,
    /// Sum of profit over placed tasks, saturating at `i64::MAX`.
    pub total_profit: i64,
    /// Vehicles with at least one task.
    pub vehicles_used: usize,
    /// Size of the fleet the schedule was built for.
    pub fleet_size: usize,
    /// Per-vehicle utilization over the makespan.
    pub utilization_by_vehicle: BTreeMap<usize, f64>,
    /// Average utilization over used vehicles (0.0..1.0).
    pub avg_utilization: f64,
    /// Average gap between deadline and completion of placed tasks.
    pub avg_slack: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the tasks it was built from.
    ///
    /// Assignments whose task is missing from `tasks` are counted but
    /// contribute no profit or slack.
    pub fn calculate(schedule: &Schedule, tasks: &[Task], fleet_size: usize) -> Self {
        let by_id: HashMap<TaskId, &Task> = tasks.iter().map(|t| (t.id(), t)).collect();
        let makespan = schedule.makespan();

        let mut total_profit: i64 = 0;
        let mut total_slack: f64 = 0.0;
        let mut matched: usize = 0;
        for a in &schedule.assignments {
            if let Some(task) = by_id.get(&a.task_id) {
                total_profit = total_profit.saturating_add(task.profit());
                total_slack += (task.deadline() - a.end) as f64;
                matched += 1;
            }
        }

        let utilization_by_vehicle: BTreeMap<usize, f64> = if makespan > 0 {
            schedule
                .committed_by_vehicle()
                .into_iter()
                .map(|(v, busy)| (v, busy as f64 / makespan as f64))
                .collect()
        } else {
            BTreeMap::new()
        };

        let avg_utilization = if utilization_by_vehicle.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_vehicle.values().sum();
            sum / utilization_by_vehicle.len() as f64
        };

        let scheduled_count = schedule.assignment_count();
        let fill_rate = if tasks.is_empty() {
            1.0
        } else {
            scheduled_count as f64 / tasks.len() as f64
        };

        let avg_slack = if matched == 0 {
            0.0
        } else {
            total_slack / matched as f64
        };

        Self {
            makespan,
            scheduled_count,
            unscheduled_count: tasks.len().saturating_sub(scheduled_count),
            fill_rate,
            total_profit,
            vehicles_used: utilization_by_vehicle.len(),
            fleet_size,
            utilization_by_vehicle,
            avg_utilization,
            avg_slack,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_fill_rate: f64, min_utilization: f64) -> bool {
        self.fill_rate >= min_fill_rate && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;
    use crate::scheduler::GreedyScheduler;

    fn make_task(id: TaskId, processing_time: i64, deadline: i64) -> Task {
        Task::new(id, processing_time, deadline).unwrap()
    }

    #[test]
    fn test_kpi_with_large_profits() {
        let tasks: Vec<Task> = (1..=3)
            .map(|id| make_task(id, i64::MAX / 10, i64::MAX))
            .collect();
        let schedule = GreedyScheduler::new().schedule(&tasks, 1);

        let kpi = ScheduleKpi::calculate(&schedule, &tasks, 1);
        assert_eq!(kpi.scheduled_count, 3);
        assert_eq!(kpi.total_profit, i64::MAX);
        assert!(kpi.avg_slack > 0.0);
    }

    #[test]
    fn test_kpi_basic() {
        let tasks = vec![make_task(1, 5, 5), make_task(2, 5, 10)];
        let schedule = GreedyScheduler::new().schedule(&tasks, 1);

        let kpi = ScheduleKpi::calculate(&schedule, &tasks, 1);
        assert_eq!(kpi.makespan, 10);
        assert_eq!(kpi.scheduled_count, 2);
        assert_eq!(kpi.unscheduled_count, 0);
        assert_eq!(kpi.total_profit, 100);
        assert_eq!(kpi.vehicles_used, 1);
        assert!((kpi.fill_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.avg_slack - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_unscheduled() {
        let tasks = vec![make_task(1, 3, 3), make_task(2, 3, 3)];
        let schedule = GreedyScheduler::new().schedule(&tasks, 1);

        let kpi = ScheduleKpi::calculate(&schedule, &tasks, 1);
        assert_eq!(kpi.scheduled_count, 1);
        assert_eq!(kpi.unscheduled_count, 1);
        assert_eq!(kpi.total_profit, 30);
        assert!((kpi.fill_rate - 0.5).abs() < 1e-10);
        assert!(!kpi.meets_thresholds(0.9, 0.0));
        assert!(kpi.meets_thresholds(0.5, 0.0));
    }

    #[test]
    fn test_kpi_utilization() {
        let tasks = vec![make_task(1, 4, 4), make_task(2, 2, 2)];
        let mut schedule = Schedule::new();
        schedule.add_assignment(Assignment::new(1, 0, 0, 4));
        schedule.add_assignment(Assignment::new(2, 1, 0, 2));

        let kpi = ScheduleKpi::calculate(&schedule, &tasks, 30);
        // Vehicle 0: 4/4, vehicle 1: 2/4
        assert!((kpi.utilization_by_vehicle[&0] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_vehicle[&1] - 0.5).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.75).abs() < 1e-10);
        assert_eq!(kpi.vehicles_used, 2);
        assert_eq!(kpi.fleet_size, 30);
    }

    #[test]
    fn test_kpi_slack() {
        let tasks = vec![make_task(1, 2, 10), make_task(2, 2, 6)];
        let schedule = GreedyScheduler::new().schedule(&tasks, 1);

        // Task 2: 0..2, slack 4. Task 1: 2..4, slack 6.
        let kpi = ScheduleKpi::calculate(&schedule, &tasks, 1);
        assert!((kpi.avg_slack - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &[], 30);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.total_profit, 0);
        assert_eq!(kpi.vehicles_used, 0);
        assert!((kpi.fill_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
    }
}
