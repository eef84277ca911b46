//! First-come, first-served scheduler.
//!
//! # Algorithm
//!
//! Single pass over the process list. The clock jumps forward over idle
//! gaps; each process then runs to completion.
//!
//! The list is taken in the order given. Callers whose input is not
//! already arrival-ordered can enable [`Fcfs::with_arrival_sort`], which
//! performs a stable sort by arrival first.
//!
//! # Complexity
//! O(n), or O(n log n) with arrival sorting.

use tracing::debug;

use super::Scheduler;
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::models::{Process, Slice, Timeline};

/// First-come, first-served scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 5, 2), Process::new("P2", 2, 3, 1)];
/// let mut fcfs = Fcfs::new(&processes);
/// fcfs.schedule();
/// assert_eq!(fcfs.processes()[1].start_time(), 5);
/// assert_eq!(fcfs.processes()[1].completion_time, 8);
/// ```
#[derive(Debug, Clone)]
pub struct Fcfs {
    processes: Vec<Process>,
    timeline: Timeline,
    sort_by_arrival: bool,
}

impl Fcfs {
    /// Creates a scheduler over a copy of `processes`.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            processes: processes.to_vec(),
            timeline: Timeline::new(),
            sort_by_arrival: false,
        }
    }

    /// Stable-sorts the list by arrival time before scheduling.
    pub fn with_arrival_sort(mut self, enabled: bool) -> Self {
        self.sort_by_arrival = enabled;
        self
    }

    fn sort_by_arrival(&mut self) {
        let order = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .sort_indices(&self.processes, &DispatchContext::at_time(0));

        let mut slots: Vec<Option<Process>> = std::mem::take(&mut self.processes)
            .into_iter()
            .map(Some)
            .collect();
        self.processes = order
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect();
    }
}

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&mut self) {
        self.timeline.clear();
        if self.sort_by_arrival {
            self.sort_by_arrival();
        }

        let mut current_time: i64 = 0;
        for process in &mut self.processes {
            process.reset();

            // CPU idles until the process arrives
            if current_time < process.arrival_time {
                current_time = process.arrival_time;
            }

            let end = current_time + process.burst_time;
            process.mark_started(current_time);
            self.timeline
                .push(Slice::new(&process.name, current_time, end));
            process.complete_at(end);

            debug!(
                algorithm = "FCFS",
                process = %process.name,
                start = current_time,
                end,
                "dispatched to completion"
            );
            current_time = end;
        }
    }

    fn processes(&self) -> &[Process] {
        &self.processes
    }

    fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5, 2),
            Process::new("P2", 2, 3, 1),
            Process::new("P3", 4, 2, 3),
        ]
    }

    fn run(procs: &[Process]) -> Fcfs {
        let mut fcfs = Fcfs::new(procs);
        fcfs.schedule();
        fcfs
    }

    #[test]
    fn test_fcfs_scenario() {
        let fcfs = run(&scenario());
        let p = fcfs.processes();

        assert_eq!((p[0].start_time(), p[0].completion_time), (0, 5));
        assert_eq!((p[1].start_time(), p[1].completion_time), (5, 8));
        assert_eq!((p[2].start_time(), p[2].completion_time), (8, 10));

        assert_eq!(p[1].turnaround_time, 6);
        assert_eq!(p[1].waiting_time, 3);
        assert_eq!(p[2].turnaround_time, 6);
        assert_eq!(p[2].waiting_time, 4);
    }

    #[test]
    fn test_idle_gap() {
        let fcfs = run(&[Process::new("P1", 10, 3, 0)]);
        let p = &fcfs.processes()[0];
        assert_eq!(p.start_time(), 10);
        assert_eq!(p.completion_time, 13);
        assert_eq!(p.waiting_time, 0);
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let fcfs = run(&[Process::new("P1", 0, 2, 0), Process::new("P2", 6, 1, 0)]);
        let p = fcfs.processes();
        assert_eq!(p[1].start_time(), 6);
        assert_eq!(p[1].completion_time, 7);
        assert_eq!(fcfs.timeline().idle_time(), 4);
    }

    #[test]
    fn test_input_order_kept() {
        // P2 arrives first but is listed second
        let procs = vec![Process::new("P1", 3, 2, 0), Process::new("P2", 0, 4, 0)];
        let fcfs = run(&procs);
        let p = fcfs.processes();
        assert_eq!(p[0].name, "P1");
        assert_eq!(p[0].start_time(), 3);
        assert_eq!(p[1].start_time(), 5);
        assert_eq!(p[1].completion_time, 9);
    }

    #[test]
    fn test_arrival_sort() {
        let procs = vec![
            Process::new("P1", 3, 2, 0),
            Process::new("P2", 0, 4, 0),
            Process::new("P3", 3, 1, 0),
        ];
        let mut fcfs = Fcfs::new(&procs).with_arrival_sort(true);
        fcfs.schedule();
        let names: Vec<&str> = fcfs.processes().iter().map(|p| p.name.as_str()).collect();
        // Stable: P1 stays ahead of P3 on equal arrival
        assert_eq!(names, vec!["P2", "P1", "P3"]);
        assert_eq!(fcfs.processes()[2].completion_time, 7);
    }

    #[test]
    fn test_deterministic_rerun() {
        let a = run(&scenario());
        let b = run(&scenario());
        assert_eq!(a.processes(), b.processes());

        let mut again = a.clone();
        again.schedule();
        assert_eq!(again.processes(), a.processes());
        assert_eq!(again.timeline(), a.timeline());
    }

    #[test]
    fn test_run_to_completion() {
        let fcfs = run(&scenario());
        for p in fcfs.processes() {
            assert_eq!(p.completion_time - p.start_time(), p.burst_time);
        }
        assert_eq!(fcfs.timeline().len(), 3);
    }

    #[test]
    fn test_empty() {
        let fcfs = run(&[]);
        assert!(fcfs.processes().is_empty());
        assert!(fcfs.timeline().is_empty());
    }
}
