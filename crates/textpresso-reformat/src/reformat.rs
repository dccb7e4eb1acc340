//! The core reformat operation.
//!
//! Linear pipeline: build the fixed instruction payload, call the model with
//! it and the raw user text, parse the response strictly as JSON, then overlay
//! the caller-supplied fields onto the result.

use serde_json::{Map, Value};

use crate::client::ChatClient;
use crate::config::Config;
use crate::error::{ReformatError, ReformatResult};
use crate::models::{SearchRequest, keys};
use crate::prompt::SYSTEM_PROMPT;

/// Caller-supplied envelope fields, overlaid after the model call.
///
/// Together with the access token these are the five fields the caller always
/// controls; whatever the model emitted for them is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReformatOptions {
    /// Return the fulltext and abstract of matched documents.
    pub include_fulltext: bool,

    /// Return the text of all sentences.
    pub include_all_sentences: bool,

    /// Return the text of each matched sentence.
    pub include_match_sentences: bool,

    /// Number of results to request. Expected in 1-200; bounds are the
    /// caller boundary's responsibility, not enforced here.
    pub count: i64,
}

impl Default for ReformatOptions {
    fn default() -> Self {
        Self {
            include_fulltext: false,
            include_all_sentences: false,
            include_match_sentences: false,
            count: 10,
        }
    }
}

/// Reformats free-text plant genetics questions into Textpresso requests.
#[derive(Debug, Clone)]
pub struct QueryReformatter {
    config: Config,
}

impl QueryReformatter {
    /// Create a reformatter with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reformat a free-text query into a Textpresso search request.
    ///
    /// `user_query` is free text; `search_token` is the Textpresso credential
    /// copied into the envelope; `model_key` is the model-endpoint credential.
    /// Neither credential is validated locally, and an empty `user_query` or
    /// `model_key` must be rejected by the caller before invoking this.
    ///
    /// A fresh client is built per invocation since the model credential is
    /// per-call input; concurrent invocations share nothing.
    ///
    /// # Errors
    ///
    /// Returns error if the model call fails, if the response text is not
    /// valid JSON, or if it is valid JSON but not an object. No partial
    /// envelope is returned on failure.
    pub async fn reformat(
        &self,
        user_query: &str,
        search_token: &str,
        model_key: &str,
        options: &ReformatOptions,
    ) -> ReformatResult<SearchRequest> {
        let client = ChatClient::new(&self.config, model_key)?;
        let content = client.complete_json(SYSTEM_PROMPT, user_query).await?;

        let value: Value = serde_json::from_str(&content)?;
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => return Err(ReformatError::not_an_object(&other)),
        };

        apply_overlay(&mut fields, search_token, options);

        Ok(SearchRequest::from_fields(fields))
    }
}

/// Overwrite the caller-controlled envelope fields, unconditionally.
fn apply_overlay(fields: &mut Map<String, Value>, search_token: &str, options: &ReformatOptions) {
    fields.insert(keys::TOKEN.to_string(), Value::from(search_token));
    fields.insert(keys::INCLUDE_FULLTEXT.to_string(), Value::from(options.include_fulltext));
    fields.insert(
        keys::INCLUDE_ALL_SENTENCES.to_string(),
        Value::from(options.include_all_sentences),
    );
    fields.insert(
        keys::INCLUDE_MATCH_SENTENCES.to_string(),
        Value::from(options.include_match_sentences),
    );
    fields.insert(keys::COUNT.to_string(), Value::from(options.count));
}
