//! Preemptive round-robin scheduler.
//!
//! # Algorithm
//!
//! 1. Dequeue the head of the FIFO ready queue.
//! 2. If it has not arrived yet, the clock jumps to its arrival.
//! 3. Run it for `min(quantum, remaining)` units.
//! 4. Re-enqueue it at the tail if work remains, otherwise record
//!    completion.
//!
//! How processes enter the queue is governed by [`AdmissionPolicy`].
//!
//! # Complexity
//! O(Σ ⌈burst / quantum⌉) dispatches.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::num::NonZeroU32;
use tracing::debug;

use super::Scheduler;
use crate::models::{Process, Slice, Timeline};

/// How processes are admitted to the round-robin ready queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionPolicy {
    /// Every process is queued up front in input order, whatever its
    /// arrival time. A not-yet-arrived process at the head holds the
    /// queue until it arrives, even if later entries have arrived.
    #[default]
    Upfront,
    /// Processes enter the queue (in arrival order, stable) once they
    /// have arrived. Arrivals during a slice are enqueued before the
    /// preempted process goes back to the tail.
    OnArrival,
}

/// Preemptive round-robin scheduler with a fixed time quantum.
///
/// After `schedule()`, [`processes`](Scheduler::processes) keeps the
/// input order.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{RoundRobin, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 3, 0), Process::new("P2", 0, 2, 0)];
/// let mut rr = RoundRobin::new(&processes, NonZeroU32::new(2).unwrap());
/// rr.schedule();
/// assert_eq!(rr.processes()[0].completion_time, 5);
/// assert_eq!(rr.processes()[1].completion_time, 4);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobin {
    processes: Vec<Process>,
    timeline: Timeline,
    time_quantum: NonZeroU32,
    admission: AdmissionPolicy,
}

impl RoundRobin {
    /// Creates a scheduler over a copy of `processes`.
    pub fn new(processes: &[Process], time_quantum: NonZeroU32) -> Self {
        Self {
            processes: processes.to_vec(),
            timeline: Timeline::new(),
            time_quantum,
            admission: AdmissionPolicy::Upfront,
        }
    }

    /// Sets the admission policy.
    pub fn with_admission(mut self, admission: AdmissionPolicy) -> Self {
        self.admission = admission;
        self
    }

    /// The configured quantum.
    pub fn time_quantum(&self) -> NonZeroU32 {
        self.time_quantum
    }

    /// Runs one slice of the process at `idx` and returns the new clock and
    /// whether the process still has work left.
    fn run_slice(&mut self, idx: usize, mut current_time: i64) -> (i64, bool) {
        let quantum = i64::from(self.time_quantum.get());
        let process = &mut self.processes[idx];

        if process.arrival_time > current_time {
            current_time = process.arrival_time;
        }

        let slice = quantum.min(process.remaining_time).max(0);
        process.mark_started(current_time);

        let start = current_time;
        current_time += slice;
        process.remaining_time -= slice;
        if slice > 0 {
            self.timeline
                .push(Slice::new(&process.name, start, current_time));
        }

        if process.remaining_time > 0 {
            debug!(
                algorithm = "Round Robin",
                process = %process.name,
                start,
                end = current_time,
                remaining = process.remaining_time,
                "preempted"
            );
            (current_time, true)
        } else {
            process.complete_at(current_time);
            debug!(
                algorithm = "Round Robin",
                process = %process.name,
                start,
                end = current_time,
                "completed"
            );
            (current_time, false)
        }
    }

    fn schedule_upfront(&mut self) {
        let mut queue: VecDeque<usize> = (0..self.processes.len()).collect();
        let mut current_time: i64 = 0;

        while let Some(idx) = queue.pop_front() {
            let (now, unfinished) = self.run_slice(idx, current_time);
            current_time = now;
            if unfinished {
                queue.push_back(idx);
            }
        }
    }

    fn schedule_on_arrival(&mut self) {
        let mut by_arrival: Vec<usize> = (0..self.processes.len()).collect();
        by_arrival.sort_by_key(|&i| self.processes[i].arrival_time);

        let mut pending: VecDeque<usize> = by_arrival.into();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut current_time: i64 = 0;

        loop {
            self.admit(&mut pending, &mut queue, current_time);

            let Some(idx) = queue.pop_front() else {
                match pending.front() {
                    Some(&next) => {
                        let arrival = self.processes[next].arrival_time;
                        debug!(
                            algorithm = "Round Robin",
                            from = current_time,
                            to = arrival,
                            "cpu idle"
                        );
                        current_time = current_time.max(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            let (now, unfinished) = self.run_slice(idx, current_time);
            current_time = now;

            // Newly arrived processes queue ahead of the preempted one
            self.admit(&mut pending, &mut queue, current_time);
            if unfinished {
                queue.push_back(idx);
            }
        }
    }

    fn admit(&self, pending: &mut VecDeque<usize>, queue: &mut VecDeque<usize>, now: i64) {
        while let Some(&next) = pending.front() {
            if self.processes[next].arrival_time > now {
                break;
            }
            queue.push_back(next);
            pending.pop_front();
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn schedule(&mut self) {
        self.timeline.clear();
        self.processes.iter_mut().for_each(Process::reset);

        match self.admission {
            AdmissionPolicy::Upfront => self.schedule_upfront(),
            AdmissionPolicy::OnArrival => self.schedule_on_arrival(),
        }
    }

    fn processes(&self) -> &[Process] {
        &self.processes
    }

    fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
