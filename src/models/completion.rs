//! Completion log entry.

use serde::{Deserialize, Serialize};

use super::Task;

/// A processed task together with the simulated time it finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// The task as it was when extracted.
    pub task: Task,
    /// Simulated completion time (seconds).
    pub completion_time: f64,
    /// `completion_time > deadline`.
    pub deadline_missed: bool,
}

impl Completion {
    /// Creates a completion record, deriving the deadline-miss flag.
    pub fn new(task: Task, completion_time: f64) -> Self {
        let deadline_missed = task.misses_deadline(completion_time);
        Self {
            task,
            completion_time,
            deadline_missed,
        }
    }

    /// Time from arrival to completion (seconds).
    #[inline]
    pub fn wait_time(&self) -> f64 {
        self.completion_time - self.task.release_time()
    }

    /// Time past the deadline, zero when on time or without a deadline.
    pub fn tardiness(&self) -> f64 {
        match self.task.deadline() {
            Some(deadline) if self.completion_time > deadline => self.completion_time - deadline,
            _ => 0.0,
        }
    }
}
