use crate::Rejection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for queryguard reports.
pub const SCHEMA_REPORT_V1: &str = "queryguard.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Queryguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GuardData {
    pub target_id: i64,

    /// Length of the submitted text in Unicode scalar values.
    pub query_chars: u64,

    /// SHA-256 of the submitted text, hex encoded. Lets logs and reports correlate submissions
    /// without carrying the text itself.
    pub query_sha256: String,

    /// Enabled checks that were evaluated before the verdict was reached.
    pub checks_run: u32,

    /// Where the policy came from: `defaults` or the config file path.
    pub config_source: String,
}

/// Report envelope emitted by the CLI.
///
/// `rejections` holds exactly one entry for a first-failure run and every failing check when the
/// caller asked for a full audit. It is empty iff the verdict is `accepted`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GuardReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub rejections: Vec<Rejection>,
    pub data: GuardData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReasonCode, ids};
    use time::macros::datetime;

    #[test]
    fn report_roundtrips_through_json() {
        let report = GuardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "queryguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-01-02 03:04:05 UTC),
            finished_at: datetime!(2026-01-02 03:04:05 UTC),
            verdict: Verdict::Rejected,
            rejections: vec![Rejection::new(
                ids::CHECK_QUERY_NON_EMPTY,
                ReasonCode::Empty,
                "SQL query cannot be empty",
            )],
            data: GuardData {
                target_id: 1,
                query_chars: 0,
                query_sha256: String::new(),
                checks_run: 1,
                config_source: "defaults".to_string(),
            },
        };

        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["started_at"], "2026-01-02T03:04:05Z");
        assert_eq!(value["verdict"], "rejected");
        assert_eq!(value["rejections"][0]["reason"], "EMPTY");

        let back: GuardReport = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, report);
    }
}
