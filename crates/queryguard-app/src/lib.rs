//! Use case orchestration for queryguard.
//!
//! This crate coordinates the settings, domain and render layers. The CLI crate depends on it and
//! only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod config;
mod connection;
mod explain;
mod render;
mod rules;
mod scan;
mod validate;

pub use config::{CONFIG_SOURCE_DEFAULTS, resolve_guard};
pub use connection::{ConnectionMode, ConnectionOutcome, format_connection_outcome, run_connection_check};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, render_text, serialize_report, serialize_request, to_renderable};
pub use rules::{format_rules, run_rules};
pub use scan::{ScanEntry, ScanInput, ScanOutcome, ScanOutput, format_scan, run_scan};
pub use validate::{ValidateInput, ValidateOutput, run_validate, verdict_exit_code};
