//! Simulation configuration.
//!
//! Selects which disciplines run and carries their tuning knobs. Every
//! field has a default, so `{}` is a valid JSON configuration.
//!
//! # Example
//!
//! ```
//! use cpu_sched::config::SimulationConfig;
//! use cpu_sched::scheduler::{AdmissionPolicy, Algorithm};
//!
//! let config = SimulationConfig::from_json(
//!     r#"{"algorithms": ["round_robin"], "time_quantum": 4, "admission": "on_arrival"}"#,
//! )
//! .unwrap();
//! assert_eq!(config.algorithms, vec![Algorithm::RoundRobin]);
//! assert_eq!(config.time_quantum, 4);
//! assert_eq!(config.admission, AdmissionPolicy::OnArrival);
//! ```

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::error::SimulationError;
use crate::scheduler::{AdmissionPolicy, Algorithm};

/// Default Round Robin time quantum.
pub const DEFAULT_TIME_QUANTUM: u32 = 2;

/// Configuration for a [`Simulation`](crate::simulation::Simulation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Disciplines to run, in report order.
    pub algorithms: Vec<Algorithm>,
    /// Round Robin time quantum (must be positive).
    pub time_quantum: u32,
    /// Stable-sort FCFS input by arrival time before scheduling.
    pub fcfs_sort_by_arrival: bool,
    /// Round Robin ready-queue admission policy.
    pub admission: AdmissionPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            time_quantum: DEFAULT_TIME_QUANTUM,
            fcfs_sort_by_arrival: false,
            admission: AdmissionPolicy::Upfront,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the disciplines to run.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: u32) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Enables or disables FCFS arrival sorting.
    pub fn with_fcfs_arrival_sort(mut self, enabled: bool) -> Self {
        self.fcfs_sort_by_arrival = enabled;
        self
    }

    /// Sets the Round Robin admission policy.
    pub fn with_admission(mut self, admission: AdmissionPolicy) -> Self {
        self.admission = admission;
        self
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimulationError> {
        serde_json::to_string_pretty(self).map_err(SimulationError::Serialize)
    }

    /// The quantum as a non-zero value.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`] if the quantum is zero.
    pub fn quantum(&self) -> Result<NonZeroU32, SimulationError> {
        NonZeroU32::new(self.time_quantum)
            .ok_or_else(|| SimulationError::invalid_config("time quantum must be positive"))
    }

    /// Checks semantic constraints.
    ///
    /// - At least one algorithm is selected.
    /// - No algorithm is listed twice.
    /// - The quantum is positive when Round Robin is selected.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.algorithms.is_empty() {
            return Err(SimulationError::invalid_config("no algorithms selected"));
        }

        for (i, algorithm) in self.algorithms.iter().enumerate() {
            if self.algorithms[..i].contains(algorithm) {
                return Err(SimulationError::invalid_config(format!(
                    "algorithm '{algorithm}' listed more than once"
                )));
            }
        }

        if self.algorithms.contains(&Algorithm::RoundRobin) {
            self.quantum()?;
        }
        Ok(())
    }
}
