//! Single-CPU process scheduling simulator.
//!
//! Given processes with arrival time, burst time and priority, computes
//! for each scheduling discipline the execution order and per-process
//! timing metrics (start, completion, turnaround, waiting).
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Process`, `Timeline`, `Slice`)
//! - **`dispatching`**: Selection rules (`ShortestBurst`, `LowestPriorityValue`,
//!   `EarliestArrival`) and the `RuleEngine` that applies them
//! - **`scheduler`**: The `Scheduler` contract and its disciplines (`Fcfs`,
//!   `Sjf`, `PriorityScheduler`, `RoundRobin`) plus `ScheduleKpi`
//! - **`validation`**: Workload integrity checks (names, burst, arrival)
//! - **`simulation`**: Driver running every discipline on independent copies
//! - **`workload`**: Reference workload and seeded random generator
//! - **`config`**: `SimulationConfig` (serde / JSON)
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::{Scheduler, Sjf};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5, 2),
//!     Process::new("P2", 2, 3, 1),
//!     Process::new("P3", 4, 2, 3),
//! ];
//! let mut sjf = Sjf::new(&processes);
//! sjf.schedule();
//! for p in sjf.processes() {
//!     assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
//!     assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use models::{Process, Slice, Timeline};
pub use scheduler::{Algorithm, Scheduler};
pub use simulation::{AlgorithmRun, Simulation, SimulationReport};
