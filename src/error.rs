//! Error types for simulation setup.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised before a simulation runs.
///
/// Scheduling itself cannot fail: every failure is detected up front,
/// when the workload or configuration is checked.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The process workload failed validation.
    #[error("invalid workload ({} problem(s)): {}", .0.len(), join_messages(.0))]
    InvalidWorkload(Vec<ValidationError>),

    /// The configuration is semantically invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration or report could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl SimulationError {
    /// Create an invalid configuration error
    #[inline]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidWorkload(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidWorkload(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
