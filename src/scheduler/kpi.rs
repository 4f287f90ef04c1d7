//! Simulation quality metrics (KPIs).
//!
//! Computes standard scheduling performance indicators from a
//! completion log.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Total Tardiness | Sum of max(0, completion - deadline) |
//! | Maximum Tardiness | Largest single delay |
//! | Deadline Misses | Count of completion > deadline |
//! | On-Time Rate | Fraction meeting deadlines |
//! | Avg / Max Wait | completion - arrival |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::Completion;

/// Simulation performance indicators.
///
/// All time values are in simulated seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Number of processed tasks.
    pub completed: usize,
    /// Latest completion time.
    pub makespan: f64,
    /// Tasks that finished after their deadline.
    pub deadline_misses: usize,
    /// Sum of tardiness across all tasks.
    pub total_tardiness: f64,
    /// Maximum tardiness of any single task.
    pub max_tardiness: f64,
    /// Fraction of tasks completing on time (0.0..1.0).
    pub on_time_rate: f64,
    /// Mean wait time (completion - arrival).
    pub avg_wait_time: f64,
    /// Longest wait time.
    pub max_wait_time: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a completion log.
    pub fn calculate(completions: &[Completion]) -> Self {
        let mut makespan: f64 = 0.0;
        let mut deadline_misses = 0;
        let mut total_tardiness = 0.0;
        let mut max_tardiness: f64 = 0.0;
        let mut total_wait = 0.0;
        let mut max_wait: f64 = 0.0;

        for c in completions {
            makespan = makespan.max(c.completion_time);

            let tardiness = c.tardiness();
            if c.deadline_missed {
                deadline_misses += 1;
            }
            total_tardiness += tardiness;
            max_tardiness = max_tardiness.max(tardiness);

            let wait = c.wait_time();
            total_wait += wait;
            max_wait = max_wait.max(wait);
        }

        let count = completions.len();
        let (on_time_rate, avg_wait_time) = if count == 0 {
            (1.0, 0.0)
        } else {
            (
                (count - deadline_misses) as f64 / count as f64,
                total_wait / count as f64,
            )
        };

        Self {
            completed: count,
            makespan,
            deadline_misses,
            total_tardiness,
            max_tardiness,
            on_time_rate,
            avg_wait_time,
            max_wait_time: max_wait,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_tardiness: f64, min_on_time_rate: f64) -> bool {
        self.max_tardiness <= max_tardiness && self.on_time_rate >= min_on_time_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn done(id: u64, arrival: f64, deadline: Option<f64>, completion: f64) -> Completion {
        let mut task = Task::new(id, 1).with_arrival_time(arrival);
        if let Some(d) = deadline {
            task = task.with_deadline(d);
        }
        Completion::new(task, completion)
    }

    #[test]
    fn test_kpi_basic() {
        let log = vec![
            done(1, 0.0, Some(5.0), 1.0),
            done(2, 0.0, Some(5.0), 2.0),
        ];
        let kpi = SimulationKpi::calculate(&log);
        assert_eq!(kpi.completed, 2);
        assert!((kpi.makespan - 2.0).abs() < 1e-10);
        assert_eq!(kpi.deadline_misses, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_wait_time - 1.5).abs() < 1e-10); // (1+2)/2
        assert!((kpi.max_wait_time - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_tardiness() {
        let log = vec![
            done(1, 0.0, Some(0.5), 1.0), // Tardy by 0.5
            done(2, 0.0, Some(5.0), 2.0),
            done(3, 0.0, Some(1.0), 3.0), // Tardy by 2.0
        ];
        let kpi = SimulationKpi::calculate(&log);
        assert_eq!(kpi.deadline_misses, 2);
        assert!((kpi.total_tardiness - 2.5).abs() < 1e-10);
        assert!((kpi.max_tardiness - 2.0).abs() < 1e-10);
        assert!((kpi.on_time_rate - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_no_deadline_on_time() {
        let kpi = SimulationKpi::calculate(&[done(1, 0.0, None, 4.0)]);
        assert_eq!(kpi.deadline_misses, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SimulationKpi::calculate(&[]);
        assert_eq!(kpi.completed, 0);
        assert!((kpi.makespan - 0.0).abs() < 1e-10);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_wait_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let kpi = SimulationKpi::calculate(&[done(1, 0.0, Some(0.5), 1.0)]); // Tardy by 0.5
        assert!(kpi.meets_thresholds(0.5, 0.0));
        assert!(!kpi.meets_thresholds(0.4, 0.0));
        assert!(!kpi.meets_thresholds(1.0, 0.5)); // On-time rate is 0
    }
}
