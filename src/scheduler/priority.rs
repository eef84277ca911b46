//! Non-preemptive priority scheduler.

use super::non_preemptive;
use super::Scheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, Timeline};

/// Non-preemptive priority scheduler (lower value = higher precedence).
///
/// Same control structure as [`Sjf`](super::Sjf), selecting by priority
/// value instead of burst time. The result is in completion order.
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    processes: Vec<Process>,
    timeline: Timeline,
    engine: RuleEngine,
}

impl PriorityScheduler {
    /// Creates a scheduler over a copy of `processes`.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            processes: processes.to_vec(),
            timeline: Timeline::new(),
            engine: RuleEngine::new().with_rule(rules::LowestPriorityValue),
        }
    }
}

impl Scheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&mut self) {
        non_preemptive::dispatch(
            "Priority",
            &self.engine,
            &mut self.processes,
            &mut self.timeline,
        );
    }

    fn processes(&self) -> &[Process] {
        &self.processes
    }

    fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
