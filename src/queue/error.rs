//! Errors returned by keyed queue operations.

use std::fmt;

use thiserror::Error;

use crate::models::TaskId;

/// Direction of a keyed priority update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyChange {
    /// `increase_key`: new priority must be strictly higher.
    Increase,
    /// `decrease_key`: new priority must be strictly lower.
    Decrease,
}

impl fmt::Display for KeyChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyChange::Increase => f.write_str("higher"),
            KeyChange::Decrease => f.write_str("lower"),
        }
    }
}

/// Errors from [`PriorityQueue`](super::PriorityQueue) operations.
///
/// Extracting from an empty queue is not an error; it yields `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// No queued task has this id.
    #[error("Task with id {task_id} not found")]
    NotFound {
        /// The id that was looked up.
        task_id: TaskId,
    },

    /// The requested priority does not move in the required direction.
    #[error("New priority {requested} for task {task_id} must be {change} than current priority {current}")]
    InvalidArgument {
        /// The task being updated.
        task_id: TaskId,
        /// Its priority before the call.
        current: i32,
        /// The rejected priority.
        requested: i32,
        /// Which update was attempted.
        change: KeyChange,
    },

    /// A task with this id is already queued.
    #[error("Task with id {task_id} is already queued")]
    DuplicateId {
        /// The conflicting id.
        task_id: TaskId,
    },
}
