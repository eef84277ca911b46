//! Rule engine for process selection.
//!
//! Composes a primary rule with optional tie-breaking rules and a final
//! deterministic tie-breaking strategy.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, DispatchRule, RuleScore};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// First candidate in scan order wins (default).
    #[default]
    ScanOrder,
    /// Deterministic by process name (lexicographic).
    ByName,
}

/// A composable rule engine for process selection.
///
/// Rules are applied in sequence; a later rule is consulted only when all
/// earlier rules tie.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::RuleEngine;
/// use cpu_sched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::LowestPriorityValue)
///     .with_tie_breaker(rules::ShortestBurst);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "SJF"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// An empty engine treats every candidate as tied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Index of the process to dispatch next.
    ///
    /// Scans `candidates` in order and replaces the current best only on a
    /// strictly better comparison, so equal candidates resolve to the
    /// earliest one under [`TieBreaker::ScanOrder`].
    pub fn select_best(&self, candidates: &[Process], context: &DispatchContext) -> Option<usize> {
        self.select_among(candidates, 0..candidates.len(), context)
    }

    /// Like [`select_best`](Self::select_best), restricted to `indices`.
    pub fn select_among(
        &self,
        candidates: &[Process],
        indices: impl IntoIterator<Item = usize>,
        context: &DispatchContext,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;
        for idx in indices {
            best = match best {
                Some(b) if self.compare(&candidates[idx], &candidates[b], context) != Ordering::Less => {
                    Some(b)
                }
                _ => Some(idx),
            };
        }
        best
    }

    /// Stable sort of candidate indices, highest precedence first.
    pub fn sort_indices(&self, candidates: &[Process], context: &DispatchContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&candidates[a], &candidates[b], context));
        indices
    }

    /// Scores from each rule for one process.
    pub fn evaluate(&self, process: &Process, context: &DispatchContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(process, context))
            .collect()
    }

    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::ScanOrder => Ordering::Equal,
            TieBreaker::ByName => a.name.cmp(&b.name),
        }
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
