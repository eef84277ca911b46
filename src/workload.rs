//! Workload construction: the reference process set and random workloads.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::workload::{self, WorkloadGenerator};
//!
//! let sample = workload::sample();
//! assert_eq!(sample.len(), 5);
//!
//! let random = WorkloadGenerator::new(7).with_count(20).generate();
//! assert_eq!(random.len(), 20);
//! assert_eq!(random, WorkloadGenerator::new(7).with_count(20).generate());
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::Process;

/// The five-process reference workload.
///
/// | Name | Arrival | Burst | Priority |
/// |------|---------|-------|----------|
/// | P1 | 0 | 5 | 2 |
/// | P2 | 2 | 3 | 1 |
/// | P3 | 4 | 2 | 3 |
/// | P4 | 6 | 4 | 2 |
/// | P5 | 8 | 6 | 1 |
pub fn sample() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5, 2),
        Process::new("P2", 2, 3, 1),
        Process::new("P3", 4, 2, 3),
        Process::new("P4", 6, 4, 2),
        Process::new("P5", 8, 6, 1),
    ]
}

/// Seeded random workload generator.
///
/// Processes are named `P1..Pn` in generation order. Arrival times are
/// not sorted. The same seed and settings always produce the same workload.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    count: usize,
    max_arrival: i64,
    burst_range: RangeInclusive<i64>,
    priority_range: RangeInclusive<i32>,
}

impl WorkloadGenerator {
    /// Creates a generator with the given seed.
    ///
    /// Defaults: 10 processes, arrivals in `0..=20`, bursts in `1..=10`,
    /// priorities in `1..=5`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 10,
            max_arrival: 20,
            burst_range: 1..=10,
            priority_range: 1..=5,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest possible arrival time (clamped to ≥ 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the burst range. The lower bound is clamped to ≥ 1.
    pub fn with_burst_range(mut self, range: RangeInclusive<i64>) -> Self {
        let lo = (*range.start()).max(1);
        let hi = (*range.end()).max(lo);
        self.burst_range = lo..=hi;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, range: RangeInclusive<i32>) -> Self {
        let lo = *range.start();
        let hi = (*range.end()).max(lo);
        self.priority_range = lo..=hi;
        self
    }

    /// Generates the workload.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.burst_range.clone());
                let priority = rng.random_range(self.priority_range.clone());
                Process::new(format!("P{i}"), arrival, burst, priority)
            })
            .collect()
    }
}
