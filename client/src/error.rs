//! Unified error handling for the client.
//!
//! Transport failures stay internal to the gateway. Every public form
//! operation reports a [`FormError`] whose message is prefixed with the
//! operation that failed.

/// Fallback message when a failed response carries no usable `message`.
pub const GENERIC_FAILURE: &str = "No se pudo completar la solicitud";

/// Failure of a single request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Non-success HTTP status
    #[error("Error {status}: {message}")]
    Status { status: u16, message: String },

    /// Server could not be reached or the exchange broke off
    #[error("{0}")]
    Network(String),

    /// Body was not the expected JSON
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Error returned by the form operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Error al crear el formulario: {0}")]
    CreateFormulary(String),

    #[error("Error al obtener el formulario: {0}")]
    GetFormulary(String),

    #[error("Error al obtener respuestas: {0}")]
    GetAnswers(String),

    /// The form exists but nobody has answered it yet
    #[error("No hay respuestas en el formulario")]
    NoAnswers,

    #[error("Error al crear respuestas: {0}")]
    CreateAnswers(String),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
