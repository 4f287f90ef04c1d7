//! Task scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `Task` | Priority-bearing unit of work, keyed by `TaskId` |
//! | `Completion` | One entry of a simulation's completion log |

mod completion;
mod task;

pub use completion::Completion;
pub use task::{Task, TaskId};
