use super::{Candidate, RuleContext, excerpt};
use queryguard_types::{ReasonCode, Rejection, ids};

pub fn run(input: &Candidate<'_>, ctx: &RuleContext<'_>) -> Option<Rejection> {
    if let Some(found) = ctx
        .patterns
        .chained
        .as_ref()
        .and_then(|re| re.find(input.text))
    {
        return Some(
            Rejection::new(
                ids::CHECK_QUERY_CHAINED_STATEMENT,
                ReasonCode::SuspiciousPattern,
                "query contains suspicious patterns: a destructive statement follows `;`",
            )
            .with_help(format!(
                "submit one statement at a time (found `{}`)",
                excerpt(found.as_str())
            )),
        );
    }

    let found = ctx
        .patterns
        .suspicious
        .iter()
        .find_map(|re| re.find(input.text))?;

    Some(
        Rejection::new(
            ids::CHECK_QUERY_CHAINED_STATEMENT,
            ReasonCode::SuspiciousPattern,
            "query contains suspicious patterns",
        )
        .with_help(format!("found `{}`", excerpt(found.as_str()))),
    )
}
