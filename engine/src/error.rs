//! Error types for the Dynaform engine.
//!
//! Messages for the two domain failures match the wording the form service
//! and its existing clients already display.

use thiserror::Error;

/// All possible errors from the Dynaform engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Domain errors
    #[error("No hay campos con valores en el formulario")]
    NoFieldsWithValues,

    #[error("No hay respuestas en el formulario")]
    NoAnswers,

    #[error("no field with index {0} in formulary")]
    UnknownFieldIndex(u32),

    // Shape errors
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("encode failed: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidPayload(err.to_string())
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
