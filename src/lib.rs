//! Keyed priority queue and task scheduling simulation.
//!
//! Provides an array-backed binary max-heap whose items can be
//! re-prioritized by id, and a discrete-event scheduler simulation
//! built on top of it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskId`, `Completion`
//! - **`queue`**: `PriorityQueue` with `increase_key`/`decrease_key` by id
//! - **`scheduler`**: `SchedulerSimulation`, `SimulationConfig`, `SimulationKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, deadline order, config ranges)
//!
//! # Example
//!
//! ```
//! use u_taskqueue::models::Task;
//! use u_taskqueue::queue::PriorityQueue;
//!
//! let mut pq = PriorityQueue::new();
//! for (id, priority) in [(1, 3), (2, 5), (3, 1)] {
//!     pq.insert(Task::new(id, priority)).unwrap();
//! }
//! assert_eq!(pq.extract_max().map(|t| t.priority()), Some(5));
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod queue;
pub mod scheduler;
pub mod validation;
