use thiserror::Error;

use crate::models::entry::SlotKey;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(
        "A timetable entry already exists for {} period {}, {}",
        .0.day, .0.period, .0.full_class_name()
    )]
    DuplicateSlot(SlotKey),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unknown period: {0} (periods run from 1 to 7)")]
    UnknownPeriod(i64),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl TimetableError {
    /// Shorthand for the common `Validation(String)` construction.
    pub fn validation(message: impl Into<String>) -> Self {
        TimetableError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        TimetableError::NotFound(message.into())
    }
}

pub type TimetableResult<T> = Result<T, TimetableError>;
