//! Shared dispatch loop for non-preemptive rule-driven disciplines.
//!
//! # Algorithm
//!
//! 1. Among pending processes with `arrival_time <= clock`, select one
//!    with the rule engine (ties: first in scan order).
//! 2. If none has arrived, jump the clock to the earliest pending arrival.
//! 3. Run the selected process to completion and move it to the
//!    completed list.
//!
//! The jump in step 2 lands on the same instant a one-unit idle tick
//! would first find a candidate, so selection and timing are unchanged.
//!
//! # Complexity
//! O(n²) rule evaluations.

use tracing::debug;

use crate::dispatching::{DispatchContext, RuleEngine};
use crate::models::{Process, Slice, Timeline};

/// Runs `processes` to completion, leaving them in completion order.
pub(crate) fn dispatch(
    algorithm: &'static str,
    engine: &RuleEngine,
    processes: &mut Vec<Process>,
    timeline: &mut Timeline,
) {
    timeline.clear();

    let mut pending = std::mem::take(processes);
    pending.iter_mut().for_each(Process::reset);

    let mut completed = Vec::with_capacity(pending.len());
    let mut current_time: i64 = 0;

    while !pending.is_empty() {
        let context = DispatchContext::at_time(current_time);
        let arrived = (0..pending.len()).filter(|&i| pending[i].arrival_time <= current_time);

        let Some(selected) = engine.select_among(&pending, arrived, &context) else {
            // Idle: nothing has arrived yet
            if let Some(next_arrival) = pending.iter().map(|p| p.arrival_time).min() {
                debug!(algorithm, from = current_time, to = next_arrival, "cpu idle");
                current_time = next_arrival;
            }
            continue;
        };

        let mut process = pending.remove(selected);
        if current_time < process.arrival_time {
            current_time = process.arrival_time;
        }

        let end = current_time + process.burst_time;
        process.mark_started(current_time);
        timeline.push(Slice::new(&process.name, current_time, end));
        process.complete_at(end);

        debug!(
            algorithm,
            process = %process.name,
            start = current_time,
            end,
            "dispatched to completion"
        );
        current_time = end;
        completed.push(process);
    }

    *processes = completed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_idle_jump_matches_tick() {
        // Burst 1 at arrival 1000 plus a later short job
        let mut procs = vec![Process::new("A", 1000, 1, 0), Process::new("B", 1500, 2, 0)];
        let mut timeline = Timeline::new();
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        dispatch("TEST", &engine, &mut procs, &mut timeline);

        assert_eq!(procs[0].start_time(), 1000);
        assert_eq!(procs[0].completion_time, 1001);
        assert_eq!(procs[1].start_time(), 1500);
        assert_eq!(procs[1].completion_time, 1502);
        assert_eq!(timeline.idle_time(), 499);
    }

    #[test]
    fn test_empty_rule_engine_is_scan_order() {
        let mut procs = vec![
            Process::new("A", 0, 3, 0),
            Process::new("B", 0, 1, 0),
            Process::new("C", 0, 2, 0),
        ];
        let mut timeline = Timeline::new();
        dispatch("TEST", &RuleEngine::new(), &mut procs, &mut timeline);
        assert_eq!(timeline.dispatch_order(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_zero_burst_terminates() {
        let mut procs = vec![Process::new("A", 0, 0, 0), Process::new("B", 2, 1, 0)];
        let mut timeline = Timeline::new();
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        dispatch("TEST", &engine, &mut procs, &mut timeline);
        assert_eq!(procs.len(), 2);
        assert_eq!(procs[0].completion_time, 0);
        assert_eq!(procs[1].completion_time, 3);
    }
}
