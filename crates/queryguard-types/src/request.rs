use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Immutable validation input.
///
/// Accepts both the library field names and the backend wire names
/// (`sql_query`, `neo4j_connection_id`). Both fields are required: a missing field is a caller
/// contract violation and surfaces as [`RequestError`], never as a rejection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationRequest {
    #[serde(alias = "sql_query")]
    pub query_text: String,
    #[serde(alias = "neo4j_connection_id")]
    pub target_id: i64,
}

impl ValidationRequest {
    pub fn new(query_text: impl Into<String>, target_id: i64) -> Self {
        Self {
            query_text: query_text.into(),
            target_id,
        }
    }

    pub fn from_json(input: &str) -> Result<Self, RequestError> {
        serde_json::from_str(input).map_err(RequestError::Decode)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("malformed validation request: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Payload the translation backend accepts. Only an accepted query should ever be turned into one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TranslateRequest {
    pub sql_query: String,
    pub neo4j_connection_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_field_names() {
        let req = ValidationRequest::from_json(
            r#"{"sql_query":"SELECT * FROM products","neo4j_connection_id":3}"#,
        )
        .expect("decode");
        assert_eq!(req, ValidationRequest::new("SELECT * FROM products", 3));
    }

    #[test]
    fn decodes_library_field_names() {
        let req = ValidationRequest::from_json(r#"{"query_text":"SELECT 1","target_id":-1}"#)
            .expect("decode");
        assert_eq!(req.target_id, -1);
    }

    #[test]
    fn missing_target_is_a_decode_error() {
        let err = ValidationRequest::from_json(r#"{"sql_query":"SELECT * FROM products"}"#)
            .expect_err("target id is required");
        assert!(err.to_string().contains("neo4j_connection_id") || err.to_string().contains("target_id"));
    }

    #[test]
    fn null_query_is_a_decode_error() {
        assert!(ValidationRequest::from_json(r#"{"sql_query":null,"target_id":1}"#).is_err());
    }
}
