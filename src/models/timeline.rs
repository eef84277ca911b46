//! Execution timeline (Gantt data) model.
//!
//! A timeline is the ordered list of CPU slices a scheduling run
//! dispatched. Non-preemptive disciplines produce one slice per process;
//! Round Robin produces one slice per quantum granted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered CPU dispatch record of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub slices: Vec<Slice>,
}

/// A single contiguous stretch of CPU time given to one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Name of the dispatched process.
    pub process: String,
    /// Dispatch time.
    pub start: i64,
    /// Preemption or completion time.
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process: process.into(),
            start,
            end,
        }
    }

    /// Execution units covered by this slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Removes every slice.
    pub fn clear(&mut self) {
        self.slices.clear();
    }

    /// Latest slice end.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the CPU was executing some process.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Total idle time between consecutive slices.
    pub fn idle_time(&self) -> i64 {
        self.slices
            .windows(2)
            .map(|w| (w[1].start - w[0].end).max(0))
            .sum()
    }

    /// Slices belonging to a given process, in dispatch order.
    pub fn slices_for(&self, process: &str) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.process == process).collect()
    }

    /// Execution units received per process.
    pub fn execution_by_process(&self) -> HashMap<String, i64> {
        let mut totals: HashMap<String, i64> = HashMap::new();
        for s in &self.slices {
            *totals.entry(s.process.clone()).or_insert(0) += s.duration();
        }
        totals
    }

    /// Process names in first-dispatch order, without repeats.
    pub fn dispatch_order(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for s in &self.slices {
            if !seen.contains(&s.process.as_str()) {
                seen.push(s.process.as_str());
            }
        }
        seen
    }

    /// Number of transitions between different processes.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process != w[1].process)
            .count()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
