//! Domain errors for the ROI simulator.

use thiserror::Error;

/// Domain-level errors for simulation and scenario operations.
///
/// Every variant is per-request and recoverable by the caller via corrected
/// input; storage failures carry the underlying message for logging but are
/// never exposed verbatim over the wire.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A required input field is absent (or JSON null).
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// An input field is present but not coercible to a number.
    #[error("Field '{field}' must be a number")]
    InvalidType { field: &'static str },

    /// Inputs parsed but violate the non-negativity contract.
    #[error("{message}")]
    OutOfRange { message: &'static str },

    /// Scenario not found.
    #[error("Scenario not found: {id}")]
    ScenarioNotFound { id: i32 },

    /// Request-level validation failure (scenario name, email).
    #[error("{message}")]
    Validation { message: String },

    /// Storage failure; message is internal detail, logged but not surfaced.
    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_type(field: &'static str) -> Self {
        Self::InvalidType { field }
    }

    pub fn out_of_range(message: &'static str) -> Self {
        Self::OutOfRange { message }
    }

    pub fn scenario_not_found(id: i32) -> Self {
        Self::ScenarioNotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
