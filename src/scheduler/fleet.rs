//! Per-call vehicle clocks.

use crate::models::Task;

/// Committed time of each vehicle during one scheduling run.
#[derive(Debug, Clone)]
pub(crate) struct Fleet {
    current_time: Vec<i64>,
}

impl Fleet {
    /// A fleet of `num_vehicles` idle vehicles.
    pub(crate) fn new(num_vehicles: usize) -> Self {
        Self {
            current_time: vec![0; num_vehicles],
        }
    }

    /// Lowest-index vehicle that can still finish `task` by its deadline.
    ///
    /// A finish time beyond `i64::MAX` never fits.
    pub(crate) fn first_fit(&self, task: &Task) -> Option<usize> {
        self.current_time.iter().position(|&t| {
            t.checked_add(task.processing_time())
                .is_some_and(|end| end <= task.deadline())
        })
    }

    /// Commits `task` to `vehicle` and returns the occupied `(start, end)`.
    ///
    /// `vehicle` must come from [`first_fit`](Self::first_fit) for the same
    /// task, so `end` is bounded by the deadline.
    pub(crate) fn commit(&mut self, vehicle: usize, task: &Task) -> (i64, i64) {
        let start = self.current_time[vehicle];
        let end = start + task.processing_time();
        self.current_time[vehicle] = end;
        (start, end)
    }
}
