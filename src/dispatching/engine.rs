//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules with configurable evaluation modes and
//! tie-breaking strategies. Sorting is stable: tasks that compare equal
//! under every rule keep their input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore};
use crate::models::Task;

/// How multiple rules are combined.
#[derive(Debug, Clone, Default)]
pub enum EvaluationMode {
    /// Apply rules in sequence; use next rule only on ties.
    #[default]
    Sequential,
    /// Compute weighted sum of all rule scores.
    Weighted,
}

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep input order (default).
    #[default]
    NextRule,
    /// Ascending task ID.
    ById,
}

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn DispatchingRule>,
    weight: f64,
}

/// A composable rule engine for task prioritization.
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<WeightedRule>,
    mode: EvaluationMode,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            mode: EvaluationMode::Sequential,
            tie_breaker: TieBreaker::NextRule,
            epsilon: 1e-9,
        }
    }

    /// The delivery ordering: profit density descending, then deadline
    /// ascending, then task ID ascending.
    pub fn profit_density_first() -> Self {
        Self::new()
            .with_rule(rules::ProfitDensity)
            .with_tie_breaker(rules::Edd)
            .with_final_tie_breaker(TieBreaker::ById)
    }

    /// Adds a primary rule (weight 1.0).
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 1.0,
        });
        self
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: DispatchingRule + 'static>(
        mut self,
        rule: R,
        weight: f64,
    ) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Adds a tie-breaking rule (weight 0.0, used only in Sequential mode).
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight: 0.0,
        });
        self
    }

    /// Sets the evaluation mode.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts tasks by priority (highest priority first).
    ///
    /// Returns indices into the original task slice.
    pub fn sort_indices(&self, tasks: &[Task]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();

        match &self.mode {
            EvaluationMode::Sequential => {
                indices.sort_by(|&a, &b| self.compare_sequential(&tasks[a], &tasks[b]));
            }
            EvaluationMode::Weighted => {
                let scores: Vec<f64> = tasks.iter().map(|t| self.weighted_score(t)).collect();
                indices.sort_by(|&a, &b| {
                    scores[a]
                        .partial_cmp(&scores[b])
                        .unwrap_or(Ordering::Equal)
                        .then_with(|| self.final_tie_break(&tasks[a], &tasks[b]))
                });
            }
        }

        indices
    }

    /// Returns the index of the highest-priority task.
    pub fn select_best(&self, tasks: &[Task]) -> Option<usize> {
        self.sort_indices(tasks).first().copied()
    }

    /// Evaluates a single task and returns the weighted score of each rule.
    pub fn evaluate(&self, task: &Task) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(task) * wr.weight)
            .collect()
    }

    fn compare_sequential(&self, a: &Task, b: &Task) -> Ordering {
        for wr in &self.rules {
            let score_a = wr.rule.evaluate(a);
            let score_b = wr.rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        self.final_tie_break(a, b)
    }

    fn final_tie_break(&self, a: &Task, b: &Task) -> Ordering {
        match &self.tie_breaker {
            TieBreaker::NextRule => Ordering::Equal,
            TieBreaker::ById => a.id().cmp(&b.id()),
        }
    }

    fn weighted_score(&self, task: &Task) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(task) * wr.weight)
            .sum()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .field("mode", &self.mode)
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u64, processing_time: i64, deadline: i64) -> Task {
        Task::new(id, processing_time, deadline).unwrap()
    }

    fn ids(tasks: &[Task], indices: &[usize]) -> Vec<u64> {
        indices.iter().map(|&i| tasks[i].id()).collect()
    }

    #[test]
    fn test_edd_ordering() {
        let tasks = vec![make_task(1, 1, 50), make_task(2, 1, 10), make_task(3, 1, 30)];
        let engine = RuleEngine::new().with_rule(rules::Edd);

        assert_eq!(ids(&tasks, &engine.sort_indices(&tasks)), vec![2, 3, 1]);
    }

    #[test]
    fn test_density_first_uses_deadline() {
        let tasks = vec![
            make_task(1, 5, 10),
            make_task(2, 5, 5),
            make_task(3, 2, 7),
        ];
        let engine = RuleEngine::profit_density_first();

        // Equal densities → deadline decides
        assert_eq!(ids(&tasks, &engine.sort_indices(&tasks)), vec![2, 3, 1]);
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let tasks = vec![make_task(9, 4, 10), make_task(3, 2, 10), make_task(5, 1, 10)];
        let engine = RuleEngine::profit_density_first();

        assert_eq!(ids(&tasks, &engine.sort_indices(&tasks)), vec![3, 5, 9]);
    }

    #[test]
    fn test_stable_without_final_tie_breaker() {
        let tasks = vec![make_task(9, 4, 10), make_task(3, 2, 10), make_task(5, 1, 10)];
        let engine = RuleEngine::new()
            .with_rule(rules::ProfitDensity)
            .with_tie_breaker(rules::Edd);

        // Everything ties → input order kept
        assert_eq!(ids(&tasks, &engine.sort_indices(&tasks)), vec![9, 3, 5]);
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let tasks = vec![make_task(1, 3, 10), make_task(2, 1, 10)];
        let engine = RuleEngine::new()
            .with_rule(rules::Edd)
            .with_tie_breaker(rules::Spt);

        // EDD ties → SPT picks the shorter task
        assert_eq!(engine.select_best(&tasks), Some(1));
    }

    #[test]
    fn test_weighted_mode() {
        let tasks = vec![make_task(1, 1, 40), make_task(2, 10, 12)];
        let engine = RuleEngine::new()
            .with_mode(EvaluationMode::Weighted)
            .with_weighted_rule(rules::Edd, 0.5)
            .with_weighted_rule(rules::Spt, 0.5);

        // 1: 0.5*40 + 0.5*1 = 20.5, 2: 0.5*12 + 0.5*10 = 11
        assert_eq!(engine.select_best(&tasks), Some(1));
    }

    #[test]
    fn test_evaluate_scores() {
        let task = make_task(1, 3, 20);
        let engine = RuleEngine::new().with_rule(rules::Spt).with_rule(rules::Edd);

        let scores = engine.evaluate(&task);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - 3.0).abs() < 1e-10);
        assert!((scores[1] - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_tasks() {
        let engine = RuleEngine::profit_density_first();
        assert!(engine.sort_indices(&[]).is_empty());
        assert!(engine.select_best(&[]).is_none());
    }

    #[test]
    fn test_debug_lists_rules() {
        let debug = format!("{:?}", RuleEngine::profit_density_first());
        assert!(debug.contains("DENSITY(w=1)"));
        assert!(debug.contains("EDD(w=0)"));
    }
}
