//! Model endpoint client.
//!
//! A thin async client for an OpenAI-compatible chat completions endpoint.
//! One request per reformat invocation: no retries, no caching, no shared
//! state between invocations.

use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

/// Client for the chat completions endpoint.
pub struct ChatClient {
    /// HTTP client.
    client: Client,

    /// API key for the model endpoint.
    api_key: String,

    /// Endpoint base URL.
    api_url: String,

    /// Model identifier.
    model: String,
}

impl ChatClient {
    /// Create a new client for the given configuration and credential.
    ///
    /// The credential is an opaque per-call string; it is never validated
    /// locally.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config, api_key: impl Into<String>) -> ClientResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Request a completion constrained to a single JSON object.
    ///
    /// Sends the fixed instruction text and the raw user text as a two-message
    /// conversation at temperature zero and returns the first choice's content.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-success status, or a
    /// completion with no content.
    pub async fn complete_json(&self, system: &str, user: &str) -> ClientResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: api::TEMPERATURE,
            response_format: ResponseFormat::json_object(),
        };

        let url = format!("{}/chat/completions", self.api_url);

        tracing::debug!(model = %self.model, "chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let response = Self::handle_response(response).await?;
        let completion: ChatResponse = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ClientError::EmptyCompletion)
    }

    /// Map response status codes onto the error taxonomy.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            401 | 403 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::auth(status.as_u16(), text))
            }
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}
