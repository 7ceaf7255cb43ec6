//! Conformance tests for queryguard.
//!
//! These tests validate:
//! 1. Every check id and reason code has an explanation
//! 2. Reports produced by the binary validate against the generated report schema
//! 3. Identifier conventions (dotted check ids, SCREAMING_SNAKE reason codes)

use assert_cmd::Command;
use queryguard_types::{GuardReport, explain};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn queryguard_cmd() -> Command {
    Command::cargo_bin("queryguard").expect("queryguard binary")
}

fn queries_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("queryguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
        .join("queries")
}

fn report_validator() -> jsonschema::Validator {
    let schema = serde_json::to_value(schemars::schema_for!(GuardReport)).expect("schema JSON");
    jsonschema::validator_for(&schema).expect("report schema compiles")
}

// =============================================================================
// Explanation coverage
// =============================================================================

#[test]
fn all_check_ids_have_explanations() {
    for check_id in explain::all_check_ids() {
        let exp = explain::lookup_explanation(check_id)
            .unwrap_or_else(|| panic!("check id '{check_id}' has no explanation"));
        assert!(!exp.title.is_empty(), "check id '{check_id}' has empty title");
        assert!(!exp.description.is_empty(), "check id '{check_id}' has empty description");
        assert!(!exp.remediation.is_empty(), "check id '{check_id}' has empty remediation");
        assert!(!exp.examples.before.is_empty(), "check id '{check_id}' has no example");
    }
}

#[test]
fn all_codes_have_explanations() {
    for code in explain::all_codes() {
        let exp = explain::lookup_explanation(code)
            .unwrap_or_else(|| panic!("code '{code}' has no explanation"));
        assert!(!exp.title.is_empty(), "code '{code}' has empty title");
        assert!(!exp.remediation.is_empty(), "code '{code}' has empty remediation");
    }
}

#[test]
fn identifiers_follow_conventions() {
    for check_id in explain::all_check_ids() {
        assert!(check_id.contains('.'), "check id '{check_id}' should be dotted");
    }
    for code in explain::all_codes() {
        assert!(
            code.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
            "code '{code}' should be SCREAMING_SNAKE_CASE"
        );
    }
}

// =============================================================================
// Report schema
// =============================================================================

#[test]
fn binary_reports_validate_against_schema() {
    let validator = report_validator();
    let tmp = TempDir::new().expect("temp dir");

    let mut entries: Vec<PathBuf> = std::fs::read_dir(queries_dir())
        .expect("read fixtures")
        .map(|e| e.expect("entry").path())
        .collect();
    entries.sort();
    assert!(!entries.is_empty());

    for path in entries {
        for extra in [&[][..], &["--all"][..]] {
            let output = queryguard_cmd()
                .current_dir(tmp.path())
                .args(["validate", "--target-id", "1", "--file"])
                .arg(&path)
                .args(extra)
                .output()
                .expect("run");
            let report: Value = serde_json::from_slice(&output.stdout).expect("report JSON");

            let errors: Vec<String> = validator.iter_errors(&report).map(|e| e.to_string()).collect();
            assert!(errors.is_empty(), "{}: {errors:?}", path.display());

            let decoded: GuardReport = serde_json::from_value(report).expect("decodes");
            assert_eq!(
                decoded.rejections.is_empty(),
                decoded.verdict == queryguard_types::Verdict::Accepted,
                "{}",
                path.display()
            );
        }
    }
}

#[test]
fn schema_rejects_unknown_reason_codes() {
    let validator = report_validator();
    let report = serde_json::json!({
        "schema": "queryguard.report.v1",
        "tool": {"name": "queryguard", "version": "0.1.0"},
        "started_at": "2026-01-01T00:00:00Z",
        "finished_at": "2026-01-01T00:00:00Z",
        "verdict": "rejected",
        "rejections": [{"check_id": "query.x", "reason": "NOT_A_CODE", "message": "m"}],
        "data": {
            "target_id": 1,
            "query_chars": 1,
            "query_sha256": "",
            "checks_run": 1,
            "config_source": "defaults"
        }
    });
    assert!(!validator.is_valid(&report));
}
