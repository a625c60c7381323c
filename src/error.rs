//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The response body was not valid JSON, or a payload did not match its model.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A successful envelope did not carry the payload its result kind expects.
    #[error("Envelope error: {0}")]
    Envelope(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Other(String),
}

impl From<std::convert::Infallible> for SdkError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Failure reported by a non-reqwest [`Transport`](crate::http::Transport).
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Timeout")]
    Timeout,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited: {body}")]
    RateLimited { body: String },

    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },
}

impl HttpError {
    /// Map a non-2xx status and its raw body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited { body },
            400..=499 => HttpError::BadRequest { status, body },
            _ => HttpError::ServerError { status, body },
        }
    }

    /// HTTP status code, when the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::NotFound(_) => Some(404),
            HttpError::RateLimited { .. } => Some(429),
            HttpError::BadRequest { status, .. } | HttpError::ServerError { status, .. } => {
                Some(*status)
            }
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::Transport(_) | HttpError::Timeout => None,
        }
    }

    /// Raw response body, when the error came from a response.
    pub fn body(&self) -> Option<&str> {
        match self {
            HttpError::NotFound(body)
            | HttpError::RateLimited { body }
            | HttpError::BadRequest { body, .. }
            | HttpError::ServerError { body, .. } => Some(body),
            _ => None,
        }
    }
}
