//! Error types for cloud factory operations.
//!
//! The pool never retries a failed factory call on its own; these errors are
//! handed back to the caller unchanged. The one classification the pool does
//! care about is subnet exhaustion, which it surfaces through
//! [`Condition::InsufficientVSwitchIP`](crate::Condition).

use thiserror::Error;

/// Result type alias for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Errors returned by a [`Factory`](crate::Factory) implementation.
#[derive(Debug, Clone, Error)]
pub enum FactoryError {
    /// The cloud API rejected or failed the call.
    #[error("cloud API call {operation} failed: {message}")]
    Api {
        /// The API operation (e.g. "AssignPrivateIpAddresses").
        operation: String,
        /// Error message returned by the API.
        message: String,
    },

    /// The subnet has no free addresses left.
    #[error("vSwitch {vswitch_id} has insufficient IP addresses")]
    InsufficientVSwitchIp {
        /// The exhausted vSwitch.
        vswitch_id: String,
    },

    /// The cloud API throttled the call.
    #[error("cloud API call {operation} was throttled")]
    Throttled {
        /// The throttled API operation.
        operation: String,
    },

    /// The addressed resource does not exist remotely.
    #[error("resource {resource} not found")]
    NotFound {
        /// The missing resource id.
        resource: String,
    },
}

impl FactoryError {
    /// Creates an API error.
    pub fn api(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates an insufficient-address error.
    pub fn insufficient_vswitch_ip(vswitch_id: impl Into<String>) -> Self {
        Self::InsufficientVSwitchIp {
            vswitch_id: vswitch_id.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Returns true if the subnet ran out of addresses.
    pub fn is_insufficient_ip(&self) -> bool {
        matches!(self, FactoryError::InsufficientVSwitchIp { .. })
    }

    /// Returns true if a later attempt may succeed without operator action.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FactoryError::Throttled { .. } | FactoryError::Api { .. }
        )
    }
}
