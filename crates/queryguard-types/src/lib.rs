//! Stable DTOs and IDs used across the queryguard workspace.
//!
//! This crate is intentionally boring:
//! - stable string IDs for checks and reason codes
//! - the validation request/result shapes and the backend payload
//! - connection form DTOs
//! - the emitted report envelope
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod connection;
pub mod explain;
pub mod ids;
pub mod reason;
pub mod receipt;
pub mod request;
pub mod result;

pub use connection::{ConnectionDraft, ConnectionIssue, ConnectionPatch, ConnectionTest, DbType};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use reason::{ParseReasonError, ReasonCode};
pub use receipt::{GuardData, GuardReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
pub use request::{RequestError, TranslateRequest, ValidationRequest};
pub use result::{Rejection, ValidationResult};
