//! Runner error types.

use ellsberg_core::{SessionError, SinkError};

use crate::flow::FlowError;

/// Errors that can occur while driving a session.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Prompt input could not be validated.
    #[error("flow error: {0}")]
    Flow(#[from] FlowError),

    /// The session itself failed.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Appending to the results sink failed.
    #[error("results sink error: {0}")]
    Sink(#[from] SinkError),

    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The input stream closed before the session completed.
    #[error("input ended before the session completed")]
    EndOfInput,
}
