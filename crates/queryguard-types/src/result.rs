use crate::ReasonCode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Why a query was refused: the check that fired, its reason code, and the message a caller shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rejection {
    pub check_id: String,
    pub reason: ReasonCode,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Rejection {
    pub fn new(check_id: &str, reason: ReasonCode, message: impl Into<String>) -> Self {
        Self {
            check_id: check_id.to_string(),
            reason,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Verdict for a single validation call. Computed fresh per call; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationResult {
    Accepted,
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    pub fn reason(&self) -> Option<ReasonCode> {
        self.rejection().map(|r| r.reason)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected(r) => Some(r),
        }
    }
}

impl From<Option<Rejection>> for ValidationResult {
    fn from(value: Option<Rejection>) -> Self {
        match value {
            Some(r) => ValidationResult::Rejected(r),
            None => ValidationResult::Accepted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids;
    use serde_json::json;

    #[test]
    fn accepted_serializes_with_status_tag() {
        let value = serde_json::to_value(ValidationResult::Accepted).expect("serialize");
        assert_eq!(value, json!({ "status": "accepted" }));
    }

    #[test]
    fn rejected_flattens_rejection_fields() {
        let result = ValidationResult::Rejected(Rejection::new(
            ids::CHECK_QUERY_STATEMENT_KEYWORD,
            ReasonCode::NotSql,
            "no SQL statement detected",
        ));
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["status"], "rejected");
        assert_eq!(value["reason"], "NOT_SQL");
        assert_eq!(value["check_id"], "query.statement_keyword");
        assert!(value.get("help").is_none());

        let back: ValidationResult = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, result);
    }

    #[test]
    fn reason_is_none_when_accepted() {
        assert_eq!(ValidationResult::Accepted.reason(), None);
        assert!(ValidationResult::from(None).is_accepted());
    }
}
