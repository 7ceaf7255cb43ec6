use super::{Candidate, RuleContext};
use crate::policy::COMMENT_MARKER;
use queryguard_types::{ReasonCode, Rejection, ids};

pub fn run(input: &Candidate<'_>, ctx: &RuleContext<'_>) -> Option<Rejection> {
    let max = ctx.policy.max_comment_markers;
    // Non-overlapping: `---` counts once.
    let count = input.text.matches(COMMENT_MARKER).count();
    if count <= max {
        return None;
    }

    Some(
        Rejection::new(
            ids::CHECK_QUERY_COMMENT_MARKERS,
            ReasonCode::SuspiciousPattern,
            format!("query contains too many inline comments ({count} `--` markers, at most {max} allowed)"),
        )
        .with_help("remove SQL comments before submitting"),
    )
}
