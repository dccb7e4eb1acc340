//! The Textpresso search request envelope.
//!
//! The envelope is an open mapping: apart from the five overlay fields, the
//! reformatter passes whatever the model produced through unexamined, so the
//! representation is a JSON object with typed accessors rather than a rigid
//! record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope field names.
pub mod keys {
    /// Textpresso access token.
    pub const TOKEN: &str = "token";

    /// The structured query object.
    pub const QUERY: &str = "query";

    /// Whether to return fulltext and abstract of matched documents.
    pub const INCLUDE_FULLTEXT: &str = "include_fulltext";

    /// Whether to return the text of all sentences.
    pub const INCLUDE_ALL_SENTENCES: &str = "include_all_sentences";

    /// Whether to return each matched sentence.
    pub const INCLUDE_MATCH_SENTENCES: &str = "include_match_sentences";

    /// Pagination offset; the first document is number 0.
    pub const SINCE_NUM: &str = "since_num";

    /// Pagination size, at most 200.
    pub const COUNT: &str = "count";

    /// The fields always forced to caller-supplied values after the model call.
    pub const OVERLAY: &[&str] =
        &[TOKEN, INCLUDE_FULLTEXT, INCLUDE_ALL_SENTENCES, INCLUDE_MATCH_SENTENCES, COUNT];
}

/// A Textpresso search request.
///
/// Serializes transparently as the underlying JSON object. The typed accessors
/// return `None` when a field is absent or the model emitted it with an
/// unexpected type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchRequest {
    fields: Map<String, Value>,
}

impl SearchRequest {
    /// Wrap an already-overlaid field map.
    pub(crate) fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The Textpresso access token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.fields.get(keys::TOKEN).and_then(Value::as_str)
    }

    /// The structured query object, as the model produced it.
    #[must_use]
    pub fn query(&self) -> Option<&Value> {
        self.fields.get(keys::QUERY)
    }

    /// Whether fulltext and abstract are requested.
    #[must_use]
    pub fn include_fulltext(&self) -> Option<bool> {
        self.fields.get(keys::INCLUDE_FULLTEXT).and_then(Value::as_bool)
    }

    /// Whether all sentence text is requested.
    #[must_use]
    pub fn include_all_sentences(&self) -> Option<bool> {
        self.fields.get(keys::INCLUDE_ALL_SENTENCES).and_then(Value::as_bool)
    }

    /// Whether matched sentence text is requested.
    #[must_use]
    pub fn include_match_sentences(&self) -> Option<bool> {
        self.fields.get(keys::INCLUDE_MATCH_SENTENCES).and_then(Value::as_bool)
    }

    /// Pagination offset, when the model supplied one.
    #[must_use]
    pub fn since_num(&self) -> Option<i64> {
        self.fields.get(keys::SINCE_NUM).and_then(Value::as_i64)
    }

    /// Requested result count.
    #[must_use]
    pub fn count(&self) -> Option<i64> {
        self.fields.get(keys::COUNT).and_then(Value::as_i64)
    }

    /// Look up an arbitrary envelope field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The full envelope as a JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the envelope, returning the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> SearchRequest {
        let Value::Object(fields) = json!({
            "token": "T",
            "query": {"keywords": "maize AND (plant height)"},
            "include_fulltext": false,
            "count": 10,
            "custom_flag": "whatever"
        }) else {
            unreachable!()
        };
        SearchRequest::from_fields(fields)
    }

    #[test]
    fn test_typed_accessors() {
        let request = sample();
        assert_eq!(request.token(), Some("T"));
        assert_eq!(request.include_fulltext(), Some(false));
        assert_eq!(request.count(), Some(10));
        assert_eq!(request.query(), Some(&json!({"keywords": "maize AND (plant height)"})));
    }

    #[test]
    fn test_absent_and_mistyped_fields_are_none() {
        let request = sample();
        assert_eq!(request.since_num(), None);

        let Value::Object(fields) = json!({"count": "ten"}) else { unreachable!() };
        let request = SearchRequest::from_fields(fields);
        assert_eq!(request.count(), None);
        assert!(request.get("count").is_some());
    }

    #[test]
    fn test_serializes_transparently() {
        let request = sample();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["token"], "T");
        assert_eq!(value["custom_flag"], "whatever");
    }

    #[test]
    fn test_into_inner_returns_the_full_object() {
        let map = sample().into_inner();
        assert_eq!(map.len(), 5);
        assert!(map.contains_key("query"));
        assert!(map.contains_key("custom_flag"));
    }

    #[test]
    fn test_overlay_key_set() {
        assert_eq!(keys::OVERLAY.len(), 5);
        assert!(!keys::OVERLAY.contains(&keys::SINCE_NUM));
        assert!(!keys::OVERLAY.contains(&keys::QUERY));
    }
}
