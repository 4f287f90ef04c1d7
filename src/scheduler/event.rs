//! Trace events recorded by the simulation loop.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Task, TaskId};

/// One step of a simulation run, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimulationEvent {
    /// The clock reached the task's arrival time and it entered the queue.
    Admitted {
        /// Clock value at admission.
        time: f64,
        /// The admitted task.
        task: Task,
    },
    /// Nothing was ready; the clock jumped to the next arrival.
    Idle {
        /// Clock value before the jump.
        from: f64,
        /// Next arrival time.
        until: f64,
    },
    /// The task was extracted and started service.
    Processing {
        /// Clock value at the start of service.
        time: f64,
        /// The extracted task.
        task: Task,
    },
    /// Service finished after the task's deadline.
    DeadlineMiss {
        /// Completion time.
        time: f64,
        /// The late task.
        task_id: TaskId,
        /// The deadline it missed.
        deadline: f64,
    },
}

impl SimulationEvent {
    /// Clock value the event is stamped with.
    pub fn time(&self) -> f64 {
        match self {
            SimulationEvent::Admitted { time, .. }
            | SimulationEvent::Processing { time, .. }
            | SimulationEvent::DeadlineMiss { time, .. } => *time,
            SimulationEvent::Idle { from, .. } => *from,
        }
    }
}

impl fmt::Display for SimulationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationEvent::Admitted { time, task } => {
                write!(f, "Time {time:.2}: Admitted {task}")
            }
            SimulationEvent::Idle { from, until } => {
                write!(f, "Time {from:.2}: Idle until {until:.2}")
            }
            SimulationEvent::Processing { time, task } => {
                write!(f, "Time {time:.2}: Processing {task}")
            }
            SimulationEvent::DeadlineMiss {
                time,
                task_id,
                deadline,
            } => write!(
                f,
                "--> Task {task_id} missed its deadline ({deadline:.2}) at time {time:.2}"
            ),
        }
    }
}
