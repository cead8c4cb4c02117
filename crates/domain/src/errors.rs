//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinate pair could not be parsed or is out of range
    #[error("Invalid coordinates '{input}': {reason}")]
    InvalidCoordinates {
        /// The raw input that was rejected
        input: String,
        /// Why it was rejected
        reason: String,
    },
}

impl DomainError {
    /// Create an invalid coordinates error
    pub fn invalid_coordinates(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinates {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
