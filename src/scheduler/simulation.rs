//! Discrete-event scheduling simulation.
//!
//! # Algorithm
//!
//! 1. Drain the pre-populated queue and sort tasks by arrival time.
//! 2. Admit every task whose arrival time has been reached.
//! 3. If nothing is admitted, jump the clock to the next arrival, or stop
//!    when no arrivals remain.
//! 4. Otherwise extract the highest-priority task, advance the clock by the
//!    fixed service time, and record the completion (flagging late tasks).
//! 5. Repeat from 2.
//!
//! The clock never moves backwards and tasks are never preempted.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::cmp::Ordering;
use std::io::{self, Write};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use super::{SimulationConfig, SimulationError, SimulationEvent, SimulationKpi};
use crate::models::{Completion, Task, TaskId};
use crate::queue::PriorityQueue;
use crate::validation::validate_config;

/// Per-task wait figures derived from the completion log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitSummary {
    /// Task identifier.
    pub task_id: TaskId,
    /// Priority at extraction.
    pub priority: i32,
    /// completion - arrival (seconds).
    pub wait_time: f64,
    /// Whether the task finished after its deadline.
    pub deadline_missed: bool,
}

/// Serializable outcome of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Parameters the run used.
    pub config: SimulationConfig,
    /// Completion log, in processing order.
    pub completions: Vec<Completion>,
    /// Aggregate metrics.
    pub kpi: SimulationKpi,
}

/// Priority-driven, non-preemptive single-server simulation.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_taskqueue::scheduler::SchedulerSimulation;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let mut sim = SchedulerSimulation::default();
/// sim.generate_tasks(5, &mut rng).unwrap();
/// sim.run().unwrap();
///
/// assert_eq!(sim.completed().len(), 5);
/// assert!(sim.summary().iter().all(|s| s.wait_time >= 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct SchedulerSimulation {
    config: SimulationConfig,
    queue: PriorityQueue<Task>,
    completed: Vec<Completion>,
    events: Vec<SimulationEvent>,
    current_time: f64,
    next_task_id: TaskId,
}

impl SchedulerSimulation {
    /// Creates an idle simulation at t=0.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            queue: PriorityQueue::new(),
            completed: Vec::new(),
            events: Vec::new(),
            current_time: 0.0,
            next_task_id: 1,
        }
    }

    /// Simulation parameters.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Tasks waiting in the queue.
    pub fn queue(&self) -> &PriorityQueue<Task> {
        &self.queue
    }

    /// Completion log, in processing order.
    pub fn completed(&self) -> &[Completion] {
        &self.completed
    }

    /// Event trace, in the order events happened.
    pub fn events(&self) -> &[SimulationEvent] {
        &self.events
    }

    /// Current simulated clock (seconds).
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Adds a caller-built task to the queue before [`run`](Self::run).
    ///
    /// # Errors
    /// - [`SimulationError::NonFiniteTime`] if the arrival time or deadline
    ///   is NaN or infinite.
    /// - [`SimulationError::Queue`] if the id is already queued.
    pub fn submit(&mut self, task: Task) -> Result<(), SimulationError> {
        for (field, value) in [("arrival time", task.arrival_time()), ("deadline", task.deadline())] {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(SimulationError::NonFiniteTime {
                    task_id: task.task_id(),
                    field,
                    value,
                });
            }
        }

        let task_id = task.task_id();
        self.queue.insert(task)?;
        self.next_task_id = self.next_task_id.max(task_id.saturating_add(1));
        Ok(())
    }

    /// Generates `count` random tasks and inserts them into the queue.
    ///
    /// Ids continue from the last generated or submitted id, starting at 1.
    /// Priority is uniform over the configured inclusive range, arrival
    /// uniform over `[0, arrival_window)`, and the deadline is arrival plus
    /// a slack uniform over `[slack_min, slack_max)`.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidConfig`] if the configuration fails
    ///   [`validate_config`]. Nothing is generated.
    /// - [`SimulationError::IdSpaceExhausted`] if ids would overflow.
    pub fn generate_tasks<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<(), SimulationError> {
        validate_config(&self.config).map_err(SimulationError::InvalidConfig)?;

        let cfg = &self.config;
        let mut next_id = self.next_task_id;
        let mut batch = Vec::with_capacity(count);

        for _ in 0..count {
            let priority = rng.random_range(cfg.priority_min..=cfg.priority_max.max(cfg.priority_min));
            let arrival = uniform(rng, 0.0, cfg.arrival_window);
            let deadline = arrival + uniform(rng, cfg.slack_min, cfg.slack_max);

            let task = Task::new(next_id, priority)
                .with_arrival_time(arrival)
                .with_deadline(deadline);
            next_id = next_id
                .checked_add(1)
                .ok_or(SimulationError::IdSpaceExhausted)?;
            batch.push(task);
        }
        self.next_task_id = next_id;

        for task in batch {
            debug!(task_id = task.task_id(), priority = task.priority(), "generated task");
            self.queue.insert(task)?;
        }
        Ok(())
    }

    /// Runs the simulation until no admitted or pending tasks remain.
    ///
    /// # Errors
    /// [`SimulationError::ClockStalled`] if the next pending arrival does not
    /// lie ahead of the clock, which only happens for non-finite times.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        let span = info_span!("simulation_run", tasks = self.queue.len());
        let _enter = span.enter();

        let mut pending = self.queue.drain();
        pending.sort_by(|a, b| {
            a.release_time()
                .total_cmp(&b.release_time())
                .then_with(|| a.task_id().cmp(&b.task_id()))
        });
        let mut pending = pending.into_iter().peekable();

        loop {
            let now = self.current_time;
            while let Some(task) = pending.next_if(|t| t.release_time() <= now) {
                debug!(task_id = task.task_id(), time = now, "admitted");
                self.events.push(SimulationEvent::Admitted {
                    time: now,
                    task: task.clone(),
                });
                self.queue.insert(task)?;
            }

            let Some(task) = self.queue.extract_max() else {
                match pending.peek() {
                    Some(next) => {
                        let until = next.release_time();
                        if until.partial_cmp(&now) != Some(Ordering::Greater) {
                            return Err(SimulationError::ClockStalled { now, next: until });
                        }
                        debug!(from = now, until, "idle");
                        self.events.push(SimulationEvent::Idle { from: now, until });
                        self.current_time = until;
                        continue;
                    }
                    None => break,
                }
            };

            info!(
                task_id = task.task_id(),
                priority = task.priority(),
                time = now,
                "processing"
            );
            self.events.push(SimulationEvent::Processing {
                time: now,
                task: task.clone(),
            });

            self.current_time = now + self.config.service_time;
            let completion = Completion::new(task, self.current_time);

            if completion.deadline_missed {
                let deadline = completion.task.deadline().unwrap_or(f64::NAN);
                warn!(
                    task_id = completion.task.task_id(),
                    deadline,
                    time = self.current_time,
                    "deadline missed"
                );
                self.events.push(SimulationEvent::DeadlineMiss {
                    time: self.current_time,
                    task_id: completion.task.task_id(),
                    deadline,
                });
            }
            self.completed.push(completion);
        }

        info!(
            completed = self.completed.len(),
            time = self.current_time,
            "simulation finished"
        );
        Ok(())
    }

    /// Wait time per completed task, in processing order.
    pub fn summary(&self) -> Vec<WaitSummary> {
        self.completed
            .iter()
            .map(|c| WaitSummary {
                task_id: c.task.task_id(),
                priority: c.task.priority(),
                wait_time: c.wait_time(),
                deadline_missed: c.deadline_missed,
            })
            .collect()
    }

    /// Aggregate metrics over the completion log.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(&self.completed)
    }

    /// Snapshot of config, completions and KPIs.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            config: self.config.clone(),
            completions: self.completed.clone(),
            kpi: self.kpi(),
        }
    }

    /// Writes the event trace, one line per event.
    pub fn print_trace<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Starting Scheduler Simulation...")?;
        for event in &self.events {
            writeln!(out, "{event}")?;
        }
        Ok(())
    }

    /// Writes each completed task's wait time.
    pub fn print_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n--- Simulation Summary ---")?;
        for s in self.summary() {
            write!(
                out,
                "Task {} with priority {} waited {:.2} seconds.",
                s.task_id, s.priority, s.wait_time
            )?;
            if s.deadline_missed {
                write!(out, " (deadline missed)")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Default for SchedulerSimulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

/// Uniform sample from `[low, high)`, or `low` for an empty range.
///
/// Bounds must be finite; `generate_tasks` validates the config first.
fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}
