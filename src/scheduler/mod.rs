//! CPU scheduling disciplines and KPI evaluation.
//!
//! Every discipline implements [`Scheduler`]: it owns a private copy of
//! the input processes, computes their timing fields in place on
//! [`Scheduler::schedule`], and exposes the result through
//! [`Scheduler::processes`] and [`Scheduler::timeline`].
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | [`Fcfs`] | no | list order (optionally by arrival) |
//! | [`Sjf`] | no | shortest burst among arrived |
//! | [`PriorityScheduler`] | no | lowest priority value among arrived |
//! | [`RoundRobin`] | yes | FIFO rotation, fixed quantum |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod non_preemptive;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use priority::PriorityScheduler;
pub use round_robin::{AdmissionPolicy, RoundRobin};
pub use sjf::Sjf;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::models::{Process, Timeline};

/// A CPU scheduling discipline over an owned process collection.
///
/// # Contract
/// - `schedule()` resets and then writes every process's computed fields.
///   Running it again yields identical results.
/// - After `schedule()`, `processes()` holds the same set of processes
///   as the input. Order is discipline-specific.
/// - Empty input is a no-op.
pub trait Scheduler: Debug {
    /// Discipline label (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Runs the simulation to completion.
    fn schedule(&mut self);

    /// The process collection, with computed fields after `schedule()`.
    fn processes(&self) -> &[Process];

    /// CPU slices dispatched by the last `schedule()`.
    fn timeline(&self) -> &Timeline;
}

/// The closed set of supported disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come, first-served.
    Fcfs,
    /// Non-preemptive shortest job first.
    Sjf,
    /// Round robin with a fixed quantum.
    RoundRobin,
    /// Non-preemptive priority.
    Priority,
}

impl Algorithm {
    /// Every discipline, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Priority => "Priority",
        }
    }

    /// Whether a dispatched process may be suspended before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Builds a scheduler over an independent copy of `processes`.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`] if Round Robin is requested with
    /// a zero quantum.
    pub fn build(
        &self,
        processes: &[Process],
        config: &SimulationConfig,
    ) -> Result<Box<dyn Scheduler>, SimulationError> {
        let scheduler: Box<dyn Scheduler> = match self {
            Algorithm::Fcfs => {
                Box::new(Fcfs::new(processes).with_arrival_sort(config.fcfs_sort_by_arrival))
            }
            Algorithm::Sjf => Box::new(Sjf::new(processes)),
            Algorithm::RoundRobin => Box::new(
                RoundRobin::new(processes, config.quantum()?).with_admission(config.admission),
            ),
            Algorithm::Priority => Box::new(PriorityScheduler::new(processes)),
        };
        Ok(scheduler)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
