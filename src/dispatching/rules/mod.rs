//! Built-in dispatching rules.
//!
//! - **Value-based**: profit density
//! - **Due-date**: EDD
//! - **Time-based**: SPT
//!
//! All rules return lower scores for higher priority tasks.

use super::{DispatchingRule, RuleScore};
use crate::models::Task;

/// Highest profit per unit of processing time first.
#[derive(Debug, Clone, Copy)]
pub struct ProfitDensity;

impl DispatchingRule for ProfitDensity {
    fn name(&self) -> &'static str {
        "DENSITY"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        -task.profit_density()
    }

    fn description(&self) -> &'static str {
        "Highest Profit Density"
    }
}

/// Earliest Due Date.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Edd;

impl DispatchingRule for Edd {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.deadline() as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Due Date"
    }
}

/// Shortest Processing Time.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.processing_time() as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u64, processing_time: i64, deadline: i64) -> Task {
        Task::new(id, processing_time, deadline).unwrap()
    }

    #[test]
    fn test_profit_density_is_negated() {
        let task = make_task(1, 3, 6);
        assert!((ProfitDensity.evaluate(&task) + 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_profit_density_ties() {
        // Density never varies, so the rule alone cannot order tasks
        let a = make_task(1, 1, 1);
        let b = make_task(2, 50, 400);
        assert!((ProfitDensity.evaluate(&a) - ProfitDensity.evaluate(&b)).abs() < 1e-10);
    }

    #[test]
    fn test_edd() {
        let early = make_task(1, 2, 5);
        let late = make_task(2, 2, 50);
        assert!(Edd.evaluate(&early) < Edd.evaluate(&late));
    }

    #[test]
    fn test_spt() {
        let short = make_task(1, 1, 50);
        let long = make_task(2, 9, 50);
        assert!(Spt.evaluate(&short) < Spt.evaluate(&long));
    }

    #[test]
    fn test_names() {
        assert_eq!(ProfitDensity.name(), "DENSITY");
        assert_eq!(Edd.description(), "Earliest Due Date");
        assert_eq!(Spt.description(), "Shortest Processing Time");
    }
}
