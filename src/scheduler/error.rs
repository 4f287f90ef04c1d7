//! Errors returned by the scheduler simulation.

use thiserror::Error;

use crate::models::TaskId;
use crate::queue::QueueError;
use crate::validation::ValidationError;

/// Errors from [`SchedulerSimulation`](super::SchedulerSimulation).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The underlying queue rejected an operation.
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// A submitted task carries a NaN or infinite time.
    #[error("Task {task_id} has non-finite {field}: {value}")]
    NonFiniteTime {
        /// The rejected task.
        task_id: TaskId,
        /// `"arrival time"` or `"deadline"`.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Task generation was asked to use an invalid configuration.
    #[error("Invalid simulation config: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    InvalidConfig(Vec<ValidationError>),

    /// No unused task id remains for generation.
    #[error("Task id space exhausted")]
    IdSpaceExhausted,

    /// The next arrival does not lie ahead of the clock.
    #[error("Clock cannot advance from {now} to next arrival {next}")]
    ClockStalled {
        /// Clock value when the loop stalled.
        now: f64,
        /// Arrival time of the next pending task.
        next: f64,
    },
}
