use super::{Candidate, RuleContext};
use queryguard_types::{ReasonCode, Rejection, ids};

pub fn run(input: &Candidate<'_>, _ctx: &RuleContext<'_>) -> Option<Rejection> {
    if input.target_id > 0 {
        return None;
    }

    Some(Rejection::new(
        ids::CHECK_TARGET_POSITIVE_ID,
        ReasonCode::InvalidTarget,
        "a valid target connection must be selected",
    ))
}
