//! Dispatching rules and rule engine for process selection.
//!
//! Non-preemptive disciplines differ only in how they pick the next
//! process among those that have arrived. That choice is expressed as a
//! [`DispatchRule`] and evaluated by a [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{RuleEngine, DispatchContext};
//! use cpu_sched::dispatching::rules;
//! use cpu_sched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let ready = vec![Process::new("P1", 0, 5, 0), Process::new("P2", 0, 2, 0)];
//! let context = DispatchContext::at_time(0);
//! assert_eq!(engine.select_best(&ready, &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first. Scores are integral so that equal
/// workloads tie exactly and fall through to the tie-breaker.
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher precedence.**
pub trait DispatchRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process at the current simulation time.
    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
