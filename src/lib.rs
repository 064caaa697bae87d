//! Deadline-aware delivery scheduling.
//!
//! Assigns delivery tasks to a fleet of identical vehicles with a greedy
//! profit-density heuristic: tasks are ordered by profit per unit of
//! processing time (ties: earliest deadline) and each is placed on the
//! first vehicle that can still finish it by its deadline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Assignment`, `Schedule`
//! - **`validation`**: Input checks that run before a `Task` exists
//! - **`dispatching`**: Ordering rules and the rule engine
//! - **`scheduler`**: `GreedyScheduler`, the `schedule` entry point, KPIs
//! - **`session`**: Task list and ID counter owned by a front end
//! - **`config`**: Fleet size configuration
//!
//! # Example
//!
//! ```
//! use delivery_schedule::models::Task;
//! use delivery_schedule::scheduler::schedule;
//!
//! let tasks = vec![
//!     Task::new(1, 3, 3).unwrap(),
//!     Task::new(2, 3, 3).unwrap(),
//! ];
//! // One vehicle: task 2 cannot start before 3 and is dropped
//! assert_eq!(schedule(&tasks, 1), vec![(1, 0)]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Jackson (1955), "Scheduling a Production Line to Minimize Maximum Tardiness"

pub mod config;
pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod validation;
