use super::{Candidate, RuleContext};
use queryguard_types::{ReasonCode, Rejection, ids};

pub fn run(input: &Candidate<'_>, _ctx: &RuleContext<'_>) -> Option<Rejection> {
    if !input.text.trim().is_empty() {
        return None;
    }

    Some(Rejection::new(
        ids::CHECK_QUERY_NON_EMPTY,
        ReasonCode::Empty,
        "SQL query cannot be empty",
    ))
}
