//! Process (schedulable unit of work) model.
//!
//! A process carries immutable workload inputs (arrival, burst, priority)
//! and the computed outputs a scheduling run writes back into it.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// Workload inputs are fixed at construction. Computed outputs start at
/// their defaults (`remaining_time = burst_time`, everything else 0) and
/// are written by a [`Scheduler`](crate::scheduler::Scheduler) run.
///
/// Schedulers clone their input, so one `Process` list can seed every
/// algorithm without the runs corrupting each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Display name, unique within a simulation run.
    pub name: String,
    /// Time at which the process becomes eligible for dispatch.
    pub arrival_time: i64,
    /// Total execution units required.
    pub burst_time: i64,
    /// Priority value (lower = higher precedence).
    pub priority: i32,
    /// Execution units still owed.
    pub remaining_time: i64,
    /// Time of first dispatch. `None` = not yet started.
    #[serde(rename = "start_time")]
    start: Option<i64>,
    /// Time of final finish.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl Process {
    /// Creates a process with default computed fields.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            start: None,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority value.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Time of first dispatch, or 0 while the process has not started.
    #[inline]
    pub fn start_time(&self) -> i64 {
        self.start.unwrap_or(0)
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start.is_some()
    }

    /// Whether all burst units have been executed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }

    /// Delay between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time() - self.arrival_time
    }

    /// Records the first dispatch. Later calls are no-ops.
    pub(crate) fn mark_started(&mut self, time: i64) {
        if self.start.is_none() {
            self.start = Some(time);
        }
    }

    /// Records completion at `time` and derives turnaround and waiting.
    pub(crate) fn complete_at(&mut self, time: i64) {
        self.remaining_time = 0;
        self.completion_time = time;
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Restores the computed fields to their pre-run defaults.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start = None;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(arrival={}, burst={}, priority={})",
            self.name, self.arrival_time, self.burst_time, self.priority
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_defaults() {
        let p = Process::new("P1", 2, 5, 3);
        assert_eq!(p.name, "P1");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.priority, 3);
        assert_eq!(p.remaining_time, 5);
        assert_eq!(p.start_time(), 0);
        assert!(!p.has_started());
        assert_eq!(p.completion_time, 0);
        assert_eq!(p.turnaround_time, 0);
        assert_eq!(p.waiting_time, 0);
    }

    #[test]
    fn test_builder() {
        let p = Process::new("P1", 0, 4, 0).with_arrival(7).with_priority(9);
        assert_eq!(p.arrival_time, 7);
        assert_eq!(p.priority, 9);
    }

    #[test]
    fn test_start_set_once() {
        let mut p = Process::new("P1", 0, 5, 1);
        p.mark_started(0);
        p.mark_started(6);
        assert!(p.has_started());
        assert_eq!(p.start_time(), 0);
    }

    #[test]
    fn test_complete_derives_metrics() {
        let mut p = Process::new("P2", 2, 3, 1);
        p.mark_started(5);
        p.complete_at(8);
        assert_eq!(p.remaining_time, 0);
        assert_eq!(p.turnaround_time, 6);
        assert_eq!(p.waiting_time, 3);
        assert_eq!(p.response_time(), 3);
        assert!(p.is_finished());
    }

    #[test]
    fn test_reset() {
        let mut p = Process::new("P1", 1, 4, 0);
        p.mark_started(3);
        p.remaining_time = 1;
        p.complete_at(9);
        p.reset();
        assert_eq!(p, Process::new("P1", 1, 4, 0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut p = Process::new("P1", 0, 5, 2);
        p.mark_started(0);
        p.complete_at(5);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(back.has_started());
    }
}
