//! Report serialization and rendering.

use anyhow::Context;
use queryguard_domain::ValidatedQuery;
use queryguard_render::{RenderableData, RenderableRejection, RenderableReport, RenderableVerdict};
use queryguard_types::{GuardReport, TranslateRequest, Verdict};

pub fn serialize_report(report: &GuardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// JSON body for the translation backend.
pub fn serialize_request(validated: ValidatedQuery) -> anyhow::Result<String> {
    let request: TranslateRequest = validated.into();
    serde_json::to_string_pretty(&request).context("serialize translate request")
}

pub fn to_renderable(report: &GuardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Accepted => RenderableVerdict::Accepted,
            Verdict::Rejected => RenderableVerdict::Rejected,
        },
        rejections: report
            .rejections
            .iter()
            .map(|r| RenderableRejection {
                check_id: r.check_id.clone(),
                reason: r.reason.as_str().to_string(),
                message: r.message.clone(),
                help: r.help.clone(),
            })
            .collect(),
        data: RenderableData {
            target_id: report.data.target_id,
            query_chars: report.data.query_chars,
            query_sha256: report.data.query_sha256.clone(),
            checks_run: report.data.checks_run,
            config_source: report.data.config_source.clone(),
        },
    }
}

pub fn render_markdown(report: &GuardReport) -> String {
    queryguard_render::render_markdown(&to_renderable(report))
}

pub fn render_text(report: &GuardReport) -> String {
    queryguard_render::render_text(&to_renderable(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_with;
    use queryguard_domain::QueryGuard;

    fn report_for(query: &str, target: i64) -> GuardReport {
        validate_with(&QueryGuard::default(), "defaults", query, target, true).0
    }

    #[test]
    fn renderable_keeps_reason_tokens() {
        let renderable = to_renderable(&report_for("", 0));
        assert_eq!(renderable.verdict, RenderableVerdict::Rejected);
        assert_eq!(renderable.rejections[0].reason, "EMPTY");
        assert_eq!(renderable.rejections[1].reason, "NOT_SQL");
        assert_eq!(renderable.rejections[2].reason, "INVALID_TARGET");
    }

    #[test]
    fn serialized_report_uses_wire_names() {
        let bytes = serialize_report(&report_for("SELECT 1", 0)).expect("serialize");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(value["schema"], "queryguard.report.v1");
        assert_eq!(value["verdict"], "rejected");
        assert_eq!(value["rejections"][0]["reason"], "INVALID_TARGET");
        assert_eq!(value["rejections"][0]["check_id"], "target.positive_id");
    }

    #[test]
    fn request_json_uses_backend_names() {
        let validated = QueryGuard::default()
            .accept("SELECT * FROM products", 9)
            .expect("accepted");
        let json = serialize_request(validated).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["sql_query"], "SELECT * FROM products");
        assert_eq!(value["neo4j_connection_id"], 9);
    }

    #[test]
    fn text_and_markdown_agree_on_verdict() {
        let report = report_for("SELECT 1", 1);
        assert!(render_text(&report).starts_with("accepted"));
        assert!(render_markdown(&report).contains("**ACCEPTED**"));
    }
}
