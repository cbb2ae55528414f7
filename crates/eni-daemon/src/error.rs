//! Error types for the ENI daemon.

use eni_pool::FactoryError;
use eni_types::ParseError;
use thiserror::Error;

/// Result type alias for daemon operations.
pub type Result<T> = std::result::Result<T, DaemonError>;

/// Errors raised by the node (orchestrator) client.
#[derive(Debug, Clone, Error)]
pub enum NodeError {
    /// The node object could not be read or updated.
    #[error("node API request failed: {0}")]
    Api(String),

    /// The node never reported a trunk interface.
    #[error("timed out waiting for trunk interface")]
    TrunkTimeout,
}

/// Daemon-level errors.
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("cloud factory error: {0}")]
    Factory(#[from] FactoryError),

    #[error("node client error: {0}")]
    Node(#[from] NodeError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl DaemonError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true if retrying the startup step may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            DaemonError::Factory(e) => e.is_retryable(),
            DaemonError::Node(NodeError::Api(_)) => true,
            _ => false,
        }
    }
}
