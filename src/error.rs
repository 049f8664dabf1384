//! Error types for booking operations.

use thiserror::Error;

/// Errors raised while validating or assembling a booking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    #[error("unknown service '{0}'")]
    UnknownService(String),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("unknown time slot '{0}'")]
    UnknownSlot(String),

    #[error("time slot {0} is already booked")]
    SlotOccupied(String),

    #[error("malformed slot list: {0}")]
    MalformedResponse(String),

    #[error("Preencha todos os campos antes de confirmar.")]
    IncompleteForm { missing: Vec<&'static str> },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AgendaError {
    fn from(e: serde_json::Error) -> Self {
        AgendaError::MalformedResponse(e.to_string())
    }
}

impl From<toml::de::Error> for AgendaError {
    fn from(e: toml::de::Error) -> Self {
        AgendaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AgendaError>;
