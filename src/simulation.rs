//! Simulation driver.
//!
//! Runs every configured discipline over the same workload and collects
//! the results for a presentation layer.
//!
//! # Algorithm
//!
//! 1. Validate the workload and configuration; reject before any run.
//! 2. For each algorithm, build a scheduler over an independent copy of
//!    the workload and run it to completion.
//! 3. Compute KPIs from each run's processes and timeline.
//!
//! # Example
//!
//! ```
//! use cpu_sched::simulation::Simulation;
//! use cpu_sched::scheduler::Algorithm;
//! use cpu_sched::workload;
//!
//! let report = Simulation::new(workload::sample()).run().unwrap();
//! assert_eq!(report.runs.len(), 4);
//!
//! let sjf = report.run_for(Algorithm::Sjf).unwrap();
//! assert_eq!(sjf.processes[1].name, "P3");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::models::{Process, Timeline};
use crate::scheduler::{Algorithm, ScheduleKpi};
use crate::validation::validate_processes;

/// A workload plus the configuration to simulate it under.
#[derive(Debug, Clone)]
pub struct Simulation {
    processes: Vec<Process>,
    config: SimulationConfig,
}

/// Result of running one discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    /// Discipline that produced this run.
    pub algorithm: Algorithm,
    /// Processes with computed fields, in the discipline's output order.
    pub processes: Vec<Process>,
    /// Dispatched CPU slices.
    pub timeline: Timeline,
    /// Quality metrics.
    pub kpi: ScheduleKpi,
}

/// Results of every configured discipline, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// One entry per algorithm.
    pub runs: Vec<AlgorithmRun>,
}

impl Simulation {
    /// Creates a simulation with the default configuration.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// The workload as given.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates, then runs every configured algorithm.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidConfig`] for a bad configuration.
    /// - [`SimulationError::InvalidWorkload`] listing every workload problem.
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        self.check()?;

        let runs = self
            .config
            .algorithms
            .iter()
            .map(|&algorithm| self.execute(algorithm))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SimulationReport { runs })
    }

    /// Validates, then runs a single algorithm.
    pub fn run_algorithm(&self, algorithm: Algorithm) -> Result<AlgorithmRun, SimulationError> {
        self.check()?;
        self.execute(algorithm)
    }

    fn check(&self) -> Result<(), SimulationError> {
        self.config.validate()?;
        validate_processes(&self.processes).map_err(|errors| {
            warn!(problems = errors.len(), "workload rejected");
            SimulationError::InvalidWorkload(errors)
        })
    }

    fn execute(&self, algorithm: Algorithm) -> Result<AlgorithmRun, SimulationError> {
        let mut scheduler = algorithm.build(&self.processes, &self.config)?;
        scheduler.schedule();

        let processes = scheduler.processes().to_vec();
        let timeline = scheduler.timeline().clone();
        let kpi = ScheduleKpi::calculate(&processes, &timeline);

        info!(
            algorithm = %algorithm,
            processes = kpi.process_count,
            makespan = kpi.makespan,
            avg_waiting = kpi.avg_waiting_time,
            avg_turnaround = kpi.avg_turnaround_time,
            "simulation run complete"
        );

        Ok(AlgorithmRun {
            algorithm,
            processes,
            timeline,
            kpi,
        })
    }
}

impl SimulationReport {
    /// The run for a given algorithm, if it was configured.
    pub fn run_for(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|r| r.algorithm == algorithm)
    }

    /// The run with the lowest average waiting time.
    ///
    /// Ties go to the earlier run.
    pub fn best_by_waiting(&self) -> Option<&AlgorithmRun> {
        self.runs.iter().fold(None, |best: Option<&AlgorithmRun>, run| match best {
            Some(b) if b.kpi.avg_waiting_time <= run.kpi.avg_waiting_time => Some(b),
            _ => Some(run),
        })
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimulationError> {
        serde_json::to_string_pretty(self).map_err(SimulationError::Serialize)
    }
}

impl fmt::Display for AlgorithmRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.algorithm)?;
        writeln!(
            f,
            "{:<10} {:<15} {:<15} {:<15} {:<15}",
            "Process", "Burst Time", "Arrival Time", "Completion Time", "Turnaround Time"
        )?;
        for p in &self.processes {
            writeln!(
                f,
                "{:<10} {:<15} {:<15} {:<15} {:<15}",
                p.name, p.burst_time, p.arrival_time, p.completion_time, p.turnaround_time
            )?;
        }
        writeln!(
            f,
            "avg waiting {:.2}, avg turnaround {:.2}, utilization {:.0}%",
            self.kpi.avg_waiting_time,
            self.kpi.avg_turnaround_time,
            self.kpi.cpu_utilization * 100.0
        )
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            writeln!(f, "{run}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::AdmissionPolicy;
    use crate::workload;

    fn completions(run: &AlgorithmRun) -> Vec<(&str, i64)> {
        run.processes
            .iter()
            .map(|p| (p.name.as_str(), p.completion_time))
            .collect()
    }

    #[test]
    fn test_sample_all_algorithms() {
        let report = Simulation::new(workload::sample()).run().unwrap();
        let algorithms: Vec<Algorithm> = report.runs.iter().map(|r| r.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());

        let fcfs = report.run_for(Algorithm::Fcfs).unwrap();
        assert_eq!(
            completions(fcfs),
            vec![("P1", 5), ("P2", 8), ("P3", 10), ("P4", 14), ("P5", 20)]
        );

        let sjf = report.run_for(Algorithm::Sjf).unwrap();
        assert_eq!(
            completions(sjf),
            vec![("P1", 5), ("P3", 7), ("P2", 10), ("P4", 14), ("P5", 20)]
        );

        let prio = report.run_for(Algorithm::Priority).unwrap();
        assert_eq!(
            completions(prio),
            vec![("P1", 5), ("P2", 8), ("P5", 14), ("P4", 18), ("P3", 20)]
        );

        for run in &report.runs {
            assert_eq!(run.kpi.makespan, 20);
            assert_eq!(run.kpi.busy_time, 20);
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let sim = Simulation::new(workload::sample());
        let report = sim.run().unwrap();
        // Input untouched
        assert!(sim.processes().iter().all(|p| !p.has_started()));
        // Every run computed from a pristine copy
        let fcfs_again = sim.run_algorithm(Algorithm::Fcfs).unwrap();
        assert_eq!(report.run_for(Algorithm::Fcfs), Some(&fcfs_again));
    }

    #[test]
    fn test_invalid_workload_rejected() {
        let sim = Simulation::new(vec![Process::new("A", 0, 0, 0), Process::new("A", 0, 1, 0)]);
        let err = sim.run().unwrap_err();
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let sim = Simulation::new(workload::sample())
            .with_config(SimulationConfig::new().with_time_quantum(0));
        assert!(matches!(sim.run(), Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn test_overflowing_workload_rejected() {
        let sim = Simulation::new(vec![Process::new("A", i64::MAX - 1, 5, 0)]);
        let err = sim.run().unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            crate::validation::ValidationErrorKind::TimeOverflow
        );
        assert!(sim.run_algorithm(Algorithm::RoundRobin).is_err());
    }

    #[test]
    fn test_empty_workload() {
        let report = Simulation::new(Vec::new()).run().unwrap();
        assert_eq!(report.runs.len(), 4);
        assert!(report.runs.iter().all(|r| r.processes.is_empty()));
    }

    #[test]
    fn test_config_selects_algorithms() {
        let config = SimulationConfig::new()
            .with_algorithms([Algorithm::RoundRobin])
            .with_time_quantum(3)
            .with_admission(AdmissionPolicy::OnArrival);
        let report = Simulation::new(workload::sample())
            .with_config(config)
            .run()
            .unwrap();
        assert_eq!(report.runs.len(), 1);
        assert!(report.run_for(Algorithm::Fcfs).is_none());
        let rr = report.run_for(Algorithm::RoundRobin).unwrap();
        assert!(rr.timeline.slices.iter().all(|s| s.duration() <= 3));
    }

    #[test]
    fn test_best_by_waiting() {
        let report = Simulation::new(workload::sample())
            .with_config(SimulationConfig::new().with_algorithms([Algorithm::Fcfs, Algorithm::Sjf]))
            .run()
            .unwrap();
        // SJF total waiting 0+1+5+4+6 = 16, FCFS 0+3+4+4+6 = 17
        assert_eq!(report.best_by_waiting().unwrap().algorithm, Algorithm::Sjf);
        assert!(SimulationReport::default().best_by_waiting().is_none());
    }

    #[test]
    fn test_display_table() {
        let sim = Simulation::new(vec![Process::new("P1", 0, 5, 2)])
            .with_config(SimulationConfig::new().with_algorithms([Algorithm::Fcfs]));
        let text = sim.run().unwrap().to_string();
        assert!(text.starts_with("=== FCFS ===\n"));
        assert!(text.contains("Process    Burst Time"));
        let row = format!("{:<10} {:<15} {:<15} {:<15} {:<15}", "P1", 5, 0, 5, 5);
        assert!(text.contains(&row));
        assert!(text.contains("utilization 100%"));
    }

    #[test]
    fn test_report_json_roundtrip() {
        let report = Simulation::new(workload::sample()).run().unwrap();
        let json = report.to_json().unwrap();
        let back: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.runs.len(), report.runs.len());
        for (b, r) in back.runs.iter().zip(&report.runs) {
            assert_eq!(b.algorithm, r.algorithm);
            assert_eq!(b.processes, r.processes);
            assert_eq!(b.timeline, r.timeline);
            assert_eq!(b.kpi.makespan, r.kpi.makespan);
        }
    }
}
