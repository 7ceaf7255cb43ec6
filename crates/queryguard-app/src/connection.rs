//! The `connection` use case: validate a connection form submitted as JSON.

use anyhow::Context;
use queryguard_domain::connection::{validate_draft, validate_patch, validate_test};
use queryguard_types::{ConnectionDraft, ConnectionIssue, ConnectionPatch, ConnectionTest};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionMode {
    #[default]
    Create,
    Update,
    Test,
}

impl ConnectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionMode::Create => "create",
            ConnectionMode::Update => "update",
            ConnectionMode::Test => "test",
        }
    }
}

pub type ConnectionOutcome = Result<(), ConnectionIssue>;

/// Decode the form for `mode` and validate it.
///
/// A form that does not decode (missing required field, unknown `db_type`) is an error, not an
/// outcome: there is no field-level verdict to report.
pub fn run_connection_check(json: &str, mode: ConnectionMode) -> anyhow::Result<ConnectionOutcome> {
    let outcome = match mode {
        ConnectionMode::Create => {
            let draft: ConnectionDraft =
                serde_json::from_str(json).context("decode connection form")?;
            validate_draft(&draft)
        }
        ConnectionMode::Update => {
            let patch: ConnectionPatch =
                serde_json::from_str(json).context("decode connection patch")?;
            validate_patch(&patch)
        }
        ConnectionMode::Test => {
            let probe: ConnectionTest =
                serde_json::from_str(json).context("decode connection test form")?;
            validate_test(&probe)
        }
    };

    if let Err(issue) = &outcome {
        tracing::debug!(mode = mode.as_str(), field = %issue.field, "connection form rejected");
    }
    Ok(outcome)
}

pub fn format_connection_outcome(outcome: &ConnectionOutcome) -> String {
    match outcome {
        Ok(()) => "valid\n".to_string(),
        Err(issue) => format!("invalid: {}: {}\n", issue.field, issue.message),
    }
}
