//! Connection form DTOs.
//!
//! These mirror what the connection dialog submits. Validation lives in `queryguard-domain`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const FIELD_CONN_NAME: &str = "conn_name";
pub const FIELD_DB_TYPE: &str = "db_type";
pub const FIELD_HOST: &str = "host";
pub const FIELD_PORT: &str = "port";
pub const FIELD_DB_USER: &str = "db_user";
pub const FIELD_DB_PASSWORD: &str = "db_password";
pub const FIELD_DATABASE_NAME: &str = "database_name";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DbType {
    SqlServer,
    Neo4j,
}

impl DbType {
    pub fn default_port(self) -> u16 {
        match self {
            DbType::SqlServer => 1433,
            DbType::Neo4j => 7687,
        }
    }
}

/// New connection (`create` mode). Ports are kept wide so out-of-range input reaches validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionDraft {
    pub conn_name: String,
    pub db_type: DbType,
    pub host: String,
    pub port: i64,
    pub db_user: String,
    pub db_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
}

/// Connectivity probe (`test` mode): a draft without a name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionTest {
    pub db_type: DbType,
    pub host: String,
    pub port: i64,
    pub db_user: String,
    pub db_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
}

/// Partial update (`update` mode). An empty patch is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conn_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_type: Option<DbType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
}

/// First offending field of a connection form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionIssue {
    pub field: String,
    pub message: String,
}

impl ConnectionIssue {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_type_uses_snake_case_tokens() {
        let t: DbType = serde_json::from_str("\"sql_server\"").expect("decode");
        assert_eq!(t, DbType::SqlServer);
        assert!(serde_json::from_str::<DbType>("\"invalid_type\"").is_err());
    }

    #[test]
    fn draft_database_name_is_optional() {
        let draft: ConnectionDraft = serde_json::from_str(
            r#"{"conn_name":"Neo4j Graph DB","db_type":"neo4j","host":"bolt://localhost",
                "port":7687,"db_user":"neo4j","db_password":"password"}"#,
        )
        .expect("decode");
        assert_eq!(draft.database_name, None);
        assert_eq!(draft.db_type.default_port(), 7687);
    }

    #[test]
    fn empty_patch_decodes() {
        let patch: ConnectionPatch = serde_json::from_str("{}").expect("decode");
        assert_eq!(patch, ConnectionPatch::default());
    }
}
