//! Simulation parameters.
//!
//! Loadable from JSON; every field is optional and falls back to the
//! defaults below.
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `service_time` | 1.0 | Seconds spent on each extracted task |
//! | `priority_min` / `priority_max` | 1 / 10 | Inclusive priority range |
//! | `arrival_window` | 10.0 | Arrivals drawn from `[0, window)` |
//! | `slack_min` / `slack_max` | 5.0 / 15.0 | Deadline offset from arrival, `[min, max)` |

use serde::{Deserialize, Serialize};

/// Parameters for task generation and the simulation clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed processing time per task (seconds).
    pub service_time: f64,
    /// Lowest generated priority (inclusive).
    pub priority_min: i32,
    /// Highest generated priority (inclusive).
    pub priority_max: i32,
    /// Upper bound (exclusive) of generated arrival times.
    pub arrival_window: f64,
    /// Smallest deadline offset after arrival.
    pub slack_min: f64,
    /// Upper bound (exclusive) of the deadline offset.
    pub slack_max: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            service_time: 1.0,
            priority_min: 1,
            priority_max: 10,
            arrival_window: 10.0,
            slack_min: 5.0,
            slack_max: 15.0,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-task service time.
    pub fn with_service_time(mut self, service_time: f64) -> Self {
        self.service_time = service_time;
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_min = min;
        self.priority_max = max;
        self
    }

    /// Sets the arrival window.
    pub fn with_arrival_window(mut self, window: f64) -> Self {
        self.arrival_window = window;
        self
    }

    /// Sets the deadline slack range.
    pub fn with_slack_range(mut self, min: f64, max: f64) -> Self {
        self.slack_min = min;
        self.slack_max = max;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SimulationConfig::default();
        assert!((cfg.service_time - 1.0).abs() < 1e-10);
        assert_eq!((cfg.priority_min, cfg.priority_max), (1, 10));
        assert!((cfg.arrival_window - 10.0).abs() < 1e-10);
        assert!((cfg.slack_min - 5.0).abs() < 1e-10);
        assert!((cfg.slack_max - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_json() {
        let cfg = SimulationConfig::from_json(r#"{"service_time": 2.5, "priority_max": 3}"#).unwrap();
        assert!((cfg.service_time - 2.5).abs() < 1e-10);
        assert_eq!(cfg.priority_max, 3);
        // Unspecified fields keep defaults
        assert_eq!(cfg.priority_min, 1);
        assert!((cfg.arrival_window - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_json_roundtrip() {
        let cfg = SimulationConfig::new()
            .with_priority_range(0, 4)
            .with_slack_range(1.0, 2.0);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(SimulationConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn test_invalid_json() {
        assert!(SimulationConfig::from_json("{\"service_time\": \"fast\"}").is_err());
    }
}
