//! The ordered rule set.
//!
//! Order decides which single rejection a caller sees when input fails several rules, so
//! [`RULES`] is append-only: new rules go at the end of the query section or after the target
//! check, never in between existing ones.

use crate::patterns::CompiledPatterns;
use crate::policy::GuardPolicy;
use queryguard_types::{ReasonCode, Rejection, ids};

mod chained_statement;
mod comment_markers;
mod max_length;
mod non_empty;
mod statement_keyword;
mod target_id;
mod unsafe_markup;


/// One validation call's input.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub target_id: i64,
}

/// Everything a rule may consult besides its input.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub policy: &'a GuardPolicy,
    pub patterns: &'a CompiledPatterns,
}

type Evaluate = fn(&Candidate<'_>, &RuleContext<'_>) -> Option<Rejection>;

#[derive(Clone, Copy)]
pub struct Rule {
    pub check_id: &'static str,
    pub reason: ReasonCode,
    evaluate: Evaluate,
}

impl Rule {
    pub fn evaluate(&self, input: &Candidate<'_>, ctx: &RuleContext<'_>) -> Option<Rejection> {
        (self.evaluate)(input, ctx)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("check_id", &self.check_id)
            .field("reason", &self.reason)
            .finish()
    }
}

pub static RULES: [Rule; 7] = [
    Rule {
        check_id: ids::CHECK_QUERY_NON_EMPTY,
        reason: ReasonCode::Empty,
        evaluate: non_empty::run,
    },
    Rule {
        check_id: ids::CHECK_QUERY_MAX_LENGTH,
        reason: ReasonCode::TooLong,
        evaluate: max_length::run,
    },
    Rule {
        check_id: ids::CHECK_QUERY_UNSAFE_MARKUP,
        reason: ReasonCode::UnsafeMarkup,
        evaluate: unsafe_markup::run,
    },
    Rule {
        check_id: ids::CHECK_QUERY_CHAINED_STATEMENT,
        reason: ReasonCode::SuspiciousPattern,
        evaluate: chained_statement::run,
    },
    Rule {
        check_id: ids::CHECK_QUERY_COMMENT_MARKERS,
        reason: ReasonCode::SuspiciousPattern,
        evaluate: comment_markers::run,
    },
    Rule {
        check_id: ids::CHECK_QUERY_STATEMENT_KEYWORD,
        reason: ReasonCode::NotSql,
        evaluate: statement_keyword::run,
    },
    Rule {
        check_id: ids::CHECK_TARGET_POSITIVE_ID,
        reason: ReasonCode::InvalidTarget,
        evaluate: target_id::run,
    },
];

/// Look up a rule by check id.
pub fn rule(check_id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.check_id == check_id)
}

/// Shorten user text quoted back in help strings.
pub(crate) fn excerpt(text: &str) -> String {
    const MAX: usize = 40;
    let mut out: String = text.chars().take(MAX).collect();
    if text.chars().nth(MAX).is_some() {
        out.push('…');
    }
    out
}
