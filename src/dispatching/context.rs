//! Dispatch context for rule evaluation.

/// Runtime state passed to dispatching rules.
///
/// The built-in rules rank on static process attributes and ignore it.
/// Time-dependent rules (aging, response ratio) read `current_time` to
/// score how long a process has been waiting.
///
/// Only processes with `arrival_time <= current_time` are ever offered
/// to a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}
