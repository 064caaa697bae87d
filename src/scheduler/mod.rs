//! Greedy delivery scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` orders tasks by profit density (ties: earliest
//! deadline, then task ID) and places each on the first vehicle that can
//! still meet its deadline. It is not optimal, but it is fast and fully
//! deterministic.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes a schedule: makespan, fill rate, profit,
//! vehicle usage, and slack.

mod fleet;
mod greedy;
mod kpi;

pub use greedy::{schedule, GreedyScheduler};
pub use kpi::ScheduleKpi;
