use super::{Candidate, RuleContext};
use queryguard_types::{ReasonCode, Rejection, ids};

pub fn run(input: &Candidate<'_>, ctx: &RuleContext<'_>) -> Option<Rejection> {
    if ctx.patterns.required.is_match(input.text) {
        return None;
    }

    Some(
        Rejection::new(
            ids::CHECK_QUERY_STATEMENT_KEYWORD,
            ReasonCode::NotSql,
            "no valid SQL statement detected",
        )
        .with_help(format!(
            "expected one of: {}",
            ctx.policy.required_keywords.join(", ")
        )),
    )
}
