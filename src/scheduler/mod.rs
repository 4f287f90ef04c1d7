//! Scheduler simulation and KPI evaluation.
//!
//! Provides a discrete-event, single-server simulation driven by the
//! keyed [`PriorityQueue`](crate::queue::PriorityQueue), plus run metrics.
//!
//! # Algorithm
//!
//! `SchedulerSimulation` admits tasks as the simulated clock reaches their
//! arrival time, always serves the highest-priority admitted task, and
//! spends a fixed service time on each. Deadline misses are recorded, not
//! treated as failures.
//!
//! # KPI
//!
//! `SimulationKpi` computes makespan, tardiness, on-time rate, and wait time.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod config;
mod error;
mod event;
mod kpi;
mod simulation;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use event::SimulationEvent;
pub use kpi::SimulationKpi;
pub use simulation::{SchedulerSimulation, SimulationReport, WaitSummary};
