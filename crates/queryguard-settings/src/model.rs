use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "queryguard.config.v1";

/// `queryguard.toml` schema v1.
///
/// Every key is optional; an absent key keeps the built-in value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QueryguardConfigV1 {
    /// Optional schema string for tooling (`queryguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Maximum query length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Maximum number of `--` comment markers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_comment_markers: Option<usize>,

    #[serde(default)]
    pub patterns: PatternsConfig,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

/// Pattern lists. A present list replaces the built-in one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PatternsConfig {
    /// Regexes for `query.unsafe_markup`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<Vec<String>>,

    /// Regexes for `query.chained_statement`, tried after the chained keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspicious: Option<Vec<String>>,

    /// Keywords that may not follow `;`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chained_keywords: Option<Vec<String>>,

    /// Keywords of which at least one must appear as a whole word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_keywords: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
