//! Configuration for the query reformatter.

use std::time::Duration;

/// Model endpoint constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the default OpenAI-compatible chat endpoint.
    pub const BASE_URL: &str = "https://api.openai.com/v1";

    /// Default model identifier.
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Sampling temperature. Zero keeps the schema mapping deterministic-leaning.
    pub const TEMPERATURE: f32 = 0.0;
}

/// Reformatter configuration.
///
/// The model credential is not part of the configuration: it is per-call user
/// input, passed to [`crate::QueryReformatter::reformat`] directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the chat endpoint (overridable for mock servers).
    pub api_url: String,

    /// Model identifier sent with each chat request.
    pub model: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration for the given endpoint and model.
    #[must_use]
    pub fn new(api_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            model: model.into(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: base_url.to_string(),
            model: api::DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::BASE_URL, api::DEFAULT_MODEL)
    }
}
