use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Machine-readable reason attached to every rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    Empty,
    TooLong,
    UnsafeMarkup,
    SuspiciousPattern,
    NotSql,
    InvalidTarget,
}

impl ReasonCode {
    pub const ALL: [ReasonCode; 6] = [
        ReasonCode::Empty,
        ReasonCode::TooLong,
        ReasonCode::UnsafeMarkup,
        ReasonCode::SuspiciousPattern,
        ReasonCode::NotSql,
        ReasonCode::InvalidTarget,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::Empty => ids::REASON_EMPTY,
            ReasonCode::TooLong => ids::REASON_TOO_LONG,
            ReasonCode::UnsafeMarkup => ids::REASON_UNSAFE_MARKUP,
            ReasonCode::SuspiciousPattern => ids::REASON_SUSPICIOUS_PATTERN,
            ReasonCode::NotSql => ids::REASON_NOT_SQL,
            ReasonCode::InvalidTarget => ids::REASON_INVALID_TARGET,
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reason code: {0}")]
pub struct ParseReasonError(pub String);

impl FromStr for ReasonCode {
    type Err = ParseReasonError;

    /// Accepts the canonical token in any ASCII case (`not_sql`, `NOT_SQL`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReasonCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseReasonError(s.to_string()))
    }
}
