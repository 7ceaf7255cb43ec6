use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Queryguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Accepted => "ACCEPTED",
        RenderableVerdict::Rejected => "REJECTED",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Target: {}\n- Query: {} characters (sha256 `{}`)\n- Checks run: {} (config: {})\n\n",
        verdict,
        report.data.target_id,
        report.data.query_chars,
        report.short_fingerprint(),
        report.data.checks_run,
        report.data.config_source,
    ));

    if report.rejections.is_empty() {
        out.push_str("No rejections.\n");
        return out;
    }

    out.push_str("## Rejections\n\n");
    for r in &report.rejections {
        out.push_str(&format!("- `{}` / `{}`: {}\n", r.check_id, r.reason, r.message));
        if let Some(help) = &r.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
