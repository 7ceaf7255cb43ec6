//! Config parsing and policy resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CheckConfig, PatternsConfig, QueryguardConfigV1, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `queryguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<QueryguardConfigV1> {
    let cfg: QueryguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the policy used by the engine (defaults, then file values, then CLI overrides) and
/// compile it into a guard.
pub fn resolve_config(
    cfg: QueryguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_parses_to_defaults() {
        assert_eq!(parse_config_toml("").expect("parse"), QueryguardConfigV1::default());
    }

    #[test]
    fn full_document_parses() {
        let cfg = parse_config_toml(
            r#"
schema = "queryguard.config.v1"
max_length = 500
max_comment_markers = 0

[patterns]
markup = ["(?i)<script"]
chained_keywords = ["DROP"]

[checks."query.statement_keyword"]
enabled = false
"#,
        )
        .expect("parse");

        assert_eq!(cfg.schema.as_deref(), Some(SCHEMA_CONFIG_V1));
        assert_eq!(cfg.max_length, Some(500));
        assert_eq!(cfg.max_comment_markers, Some(0));
        assert_eq!(cfg.patterns.markup, Some(vec!["(?i)<script".to_string()]));
        assert_eq!(cfg.patterns.suspicious, None);
        assert_eq!(
            cfg.checks["query.statement_keyword"].enabled,
            Some(false)
        );
    }

    #[test]
    fn wrong_value_type_is_a_parse_error() {
        let err = parse_config_toml("max_length = \"long\"").expect_err("type error");
        assert!(err.to_string().contains("invalid type"), "{err}");
    }
}
