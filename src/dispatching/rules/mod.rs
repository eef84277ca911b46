//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use super::{DispatchContext, DispatchRule, RuleScore};
use crate::models::Process;

/// Shortest burst first.
///
/// Minimizes average waiting time among non-preemptive disciplines
/// for a fixed set of ready processes.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Lowest priority value first (lower value = higher precedence).
#[derive(Debug, Clone, Copy)]
pub struct LowestPriorityValue;

impl DispatchRule for LowestPriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value"
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}
