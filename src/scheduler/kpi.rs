//! Scheduling quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed run's processes and timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / (makespan - first arrival) |
//! | Throughput | processes / (makespan - first arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Context Switches | adjacent slices of different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Scheduling performance indicators for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of processes scheduled.
    pub process_count: usize,
    /// Latest completion time.
    pub makespan: i64,
    /// Total time the CPU was executing.
    pub busy_time: i64,
    /// Fraction of the active span spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit over the active span.
    pub throughput: f64,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Largest single waiting time.
    pub max_waiting_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Number of CPU slices dispatched.
    pub dispatch_count: usize,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduled process list and its timeline.
    ///
    /// # Arguments
    /// * `processes` - Processes after `schedule()`.
    /// * `timeline` - The run's dispatched slices.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        let count = processes.len();
        let makespan = processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0);
        let first_arrival = processes
            .iter()
            .map(|p| p.arrival_time)
            .min()
            .unwrap_or(0);
        let busy_time = timeline.busy_time();

        let total_waiting: i64 = processes.iter().map(|p| p.waiting_time).sum();
        let max_waiting = processes
            .iter()
            .map(|p| p.waiting_time)
            .max()
            .unwrap_or(0);
        let total_turnaround: i64 = processes.iter().map(|p| p.turnaround_time).sum();
        let total_response: i64 = processes.iter().map(Process::response_time).sum();

        let span = makespan - first_arrival;
        let (cpu_utilization, throughput) = if span > 0 {
            (busy_time as f64 / span as f64, count as f64 / span as f64)
        } else {
            (0.0, 0.0)
        };

        let mean = |total: i64| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        Self {
            process_count: count,
            makespan,
            busy_time,
            cpu_utilization,
            throughput,
            total_waiting_time: total_waiting,
            max_waiting_time: max_waiting,
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            avg_response_time: mean(total_response),
            dispatch_count: timeline.len(),
            context_switches: timeline.context_switches(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
