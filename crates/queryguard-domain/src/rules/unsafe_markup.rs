use super::{Candidate, RuleContext, excerpt};
use queryguard_types::{ReasonCode, Rejection, ids};

pub fn run(input: &Candidate<'_>, ctx: &RuleContext<'_>) -> Option<Rejection> {
    let found = ctx
        .patterns
        .markup
        .iter()
        .find_map(|re| re.find(input.text))?;

    Some(
        Rejection::new(
            ids::CHECK_QUERY_UNSAFE_MARKUP,
            ReasonCode::UnsafeMarkup,
            "query contains potentially dangerous characters",
        )
        .with_help(format!(
            "remove markup such as `{}` from the query",
            excerpt(found.as_str())
        )),
    )
}
