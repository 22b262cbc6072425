//! Domain error types

use crate::seating::chamber::MAX_CHAMBER_SEATS;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid member count: {0}")]
    InvalidMembers(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Record {index} out of range (have {len})")]
    RecordOutOfRange { index: usize, len: usize },

    #[error("Chamber {chamber:?} has {total} seats (limit {limit})", limit = MAX_CHAMBER_SEATS)]
    TooManySeats { chamber: String, total: u64 },
}

impl DomainError {
    /// Check if this error was caused by rejected user input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidInput(_)
                | DomainError::InvalidMembers(_)
                | DomainError::InvalidColor(_)
                | DomainError::TooManySeats { .. }
        )
    }
}
