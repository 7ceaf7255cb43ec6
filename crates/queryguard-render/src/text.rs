use crate::{RenderableReport, RenderableVerdict};

/// One status line, then one line per rejection with an indented help line when present.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();
    match report.verdict {
        RenderableVerdict::Accepted => {
            out.push_str(&format!(
                "accepted: target {} ({} checks)\n",
                report.data.target_id, report.data.checks_run
            ));
        }
        RenderableVerdict::Rejected => {
            out.push_str(&format!("rejected: target {}\n", report.data.target_id));
        }
    }

    for r in &report.rejections {
        out.push_str(&format!("  {} [{}] {}\n", r.reason, r.check_id, r.message));
        if let Some(help) = &r.help {
            out.push_str(&format!("    help: {}\n", help));
        }
    }
    out
}
