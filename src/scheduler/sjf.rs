//! Non-preemptive shortest-job-first scheduler.

use super::non_preemptive;
use super::Scheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, Timeline};

/// Non-preemptive shortest-job-first scheduler.
///
/// At every dispatch point, runs the arrived process with the smallest
/// burst time. Equal bursts go to the process listed first among those
/// still pending. After `schedule()`, [`processes`](Scheduler::processes)
/// is in completion order.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Scheduler, Sjf};
///
/// let processes = vec![
///     Process::new("P1", 0, 5, 2),
///     Process::new("P2", 2, 3, 1),
///     Process::new("P3", 4, 2, 3),
/// ];
/// let mut sjf = Sjf::new(&processes);
/// sjf.schedule();
/// let order: Vec<&str> = sjf.processes().iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(order, vec!["P1", "P3", "P2"]);
/// ```
#[derive(Debug, Clone)]
pub struct Sjf {
    processes: Vec<Process>,
    timeline: Timeline,
    engine: RuleEngine,
}

impl Sjf {
    /// Creates a scheduler over a copy of `processes`.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            processes: processes.to_vec(),
            timeline: Timeline::new(),
            engine: RuleEngine::new().with_rule(rules::ShortestBurst),
        }
    }
}

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&mut self) {
        non_preemptive::dispatch("SJF", &self.engine, &mut self.processes, &mut self.timeline);
    }

    fn processes(&self) -> &[Process] {
        &self.processes
    }

    fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
