//! Error types for the query reformatter.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Every failure is terminal for its invocation: nothing is
//! retried and no partial envelope is ever returned.

use std::time::Duration;

/// Errors from the model-endpoint client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credential rejected by the provider (401/403 response)
    #[error("Authentication failed ({status}): {message}")]
    Auth {
        /// HTTP status code
        status: u16,
        /// Error message from the provider
        message: String,
    },

    /// Rate limited by the provider (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before a new invocation
        retry_after: Duration,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the provider
        message: String,
    },

    /// Provider-side error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Successful response carried no usable completion text
    #[error("Model returned no completion content")]
    EmptyCompletion,
}

impl ClientError {
    /// Create an authentication error.
    #[must_use]
    pub fn auth(status: u16, message: impl Into<String>) -> Self {
        Self::Auth { status, message: message.into() }
    }

    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Errors from the reformat operation.
#[derive(thiserror::Error, Debug)]
pub enum ReformatError {
    /// Error from the model-endpoint client
    #[error("Model call failed: {0}")]
    Client(#[from] ClientError),

    /// Model response text was not valid JSON
    #[error("Model response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Model response was valid JSON but not an object, so there is nothing
    /// to overlay onto
    #[error("Model response was a JSON {found}, expected an object")]
    NotAnObject {
        /// What the response actually was
        found: &'static str,
    },
}

impl ReformatError {
    /// Create a not-an-object error describing the offending value.
    #[must_use]
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        Self::NotAnObject { found }
    }

    /// Convert to a user-friendly message for the presentation boundary.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::Auth { .. }) => {
                "The model endpoint rejected the API key. Please check the key and try again."
                    .to_string()
            }
            Self::Client(ClientError::RateLimited { retry_after }) => {
                format!("Rate limited by the model endpoint. Please wait {retry_after:?} and try again.")
            }
            Self::Parse(_) | Self::NotAnObject { .. } => {
                "The model did not return a usable JSON object. Please try again.".to_string()
            }
            Self::Client(err) => format!("Model call failed: {err}"),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for reformat operations.
pub type ReformatResult<T> = Result<T, ReformatError>;
