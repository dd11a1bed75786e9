//! Errors of the task.
use thiserror::Error;

/// Errors of the task.
#[derive(Error, Debug, PartialEq)]
pub enum TaskError {
    /// The action cannot be applied to the simulator.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// The task or simulator configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
