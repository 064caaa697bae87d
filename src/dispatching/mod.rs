//! Dispatching rules and rule engine for task ordering.
//!
//! The greedy scheduler places tasks one at a time, so the order in which
//! tasks are offered to the fleet decides the outcome. Rules score tasks
//! and the rule engine turns those scores into a stable order.
//!
//! # Usage
//!
//! ```
//! use delivery_schedule::dispatching::{rules, RuleEngine, TieBreaker};
//! use delivery_schedule::models::Task;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ProfitDensity)
//!     .with_tie_breaker(rules::Edd)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! let tasks = vec![Task::new(1, 2, 9).unwrap(), Task::new(2, 2, 4).unwrap()];
//! assert_eq!(engine.sort_indices(&tasks), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::{EvaluationMode, RuleEngine, TieBreaker};

use crate::models::Task;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates task priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that favour large values
/// (profit density) return the negated value.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "EDD").
    fn name(&self) -> &'static str;

    /// Returns a score where lower = higher priority.
    fn evaluate(&self, task: &Task) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
