use super::{Candidate, RuleContext};
use queryguard_types::{ReasonCode, Rejection, ids};

pub fn run(input: &Candidate<'_>, ctx: &RuleContext<'_>) -> Option<Rejection> {
    let max = ctx.policy.max_length;

    // A char is at least one byte, so the byte length bounds the char count.
    if input.text.len() <= max {
        return None;
    }
    let chars = input.text.chars().count();
    if chars <= max {
        return None;
    }

    Some(
        Rejection::new(
            ids::CHECK_QUERY_MAX_LENGTH,
            ReasonCode::TooLong,
            format!("SQL query cannot exceed {max} characters"),
        )
        .with_help(format!("query is {chars} characters long")),
    )
}
