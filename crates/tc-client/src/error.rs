//! API error types.

use thiserror::Error;

use crate::http::status_fallback;

/// Errors that can occur when calling the ThreadCatch API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    ///
    /// `message` holds the text from the structured error body when the
    /// server sent one.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or(status_fallback(*status)))]
    Api { status: u16, message: Option<String> },

    /// The API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// A success response did not carry the expected payload.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    /// Text suitable for a transient notice: the server's own message when it
    /// sent one, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status, when the failure came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Http(error) => error.status().map(|status| status.as_u16()),
            Self::UnexpectedResponse(_) => None,
        }
    }
}
