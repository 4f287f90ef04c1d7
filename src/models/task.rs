//! Task model.
//!
//! A task is an identifiable, priority-bearing unit of work with optional
//! arrival and deadline timestamps.
//!
//! # Time Representation
//! All times are in simulated seconds relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::queue::Prioritized;

/// External handle used by keyed queue operations.
pub type TaskId = u64;

/// A schedulable task.
///
/// The priority can only change through the owning queue's
/// [`increase_key`](crate::queue::PriorityQueue::increase_key) and
/// [`decrease_key`](crate::queue::PriorityQueue::decrease_key), which
/// re-sift the task after the update.
///
/// `deadline >= arrival_time` is expected but not enforced here;
/// see [`validate_tasks`](crate::validation::validate_tasks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    task_id: TaskId,
    priority: i32,
    arrival_time: Option<f64>,
    deadline: Option<f64>,
}

impl Task {
    /// Creates a task with no arrival time or deadline.
    pub fn new(task_id: TaskId, priority: i32) -> Self {
        Self {
            task_id,
            priority,
            arrival_time: None,
            deadline: None,
        }
    }

    /// Sets the arrival time (seconds).
    pub fn with_arrival_time(mut self, arrival_time: f64) -> Self {
        self.arrival_time = Some(arrival_time);
        self
    }

    /// Sets the deadline (seconds).
    pub fn with_deadline(mut self, deadline: f64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Unique task identifier.
    #[inline]
    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Scheduling priority (higher = more urgent).
    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Arrival time. `None` = available from t=0.
    #[inline]
    pub fn arrival_time(&self) -> Option<f64> {
        self.arrival_time
    }

    /// Latest acceptable completion time. `None` = no deadline.
    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Arrival time with a missing value treated as t=0.
    pub fn release_time(&self) -> f64 {
        self.arrival_time.unwrap_or(0.0)
    }

    /// Whether finishing at `completion_time` misses the deadline.
    ///
    /// Completing exactly at the deadline is on time.
    pub fn misses_deadline(&self, completion_time: f64) -> bool {
        self.deadline
            .is_some_and(|deadline| completion_time > deadline)
    }
}

impl Prioritized for Task {
    fn id(&self) -> TaskId {
        self.task_id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }
}

struct OptTime(Option<f64>);

impl fmt::Display for OptTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(t) => write!(f, "{t:.2}"),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(id={}, priority={}, arrival={}, deadline={})",
            self.task_id,
            self.priority,
            OptTime(self.arrival_time),
            OptTime(self.deadline)
        )
    }
}
