use crate::fingerprint::query_fingerprint;
use crate::patterns::{CompiledPatterns, PatternError};
use crate::policy::GuardPolicy;
use crate::rules::{Candidate, RULES, RuleContext};
use crate::validated::ValidatedQuery;
use queryguard_types::{ReasonCode, Rejection, ValidationRequest, ValidationResult};
use std::sync::LazyLock;

static DEFAULT_GUARD: LazyLock<QueryGuard> = LazyLock::new(QueryGuard::default);

/// Validate with the built-in rule configuration.
pub fn validate(query_text: &str, target_id: i64) -> ValidationResult {
    DEFAULT_GUARD.validate(query_text, target_id)
}

/// Stateless validation pipeline. Holds only the policy and its compiled patterns, so one guard
/// can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct QueryGuard {
    policy: GuardPolicy,
    patterns: CompiledPatterns,
}

/// Result plus how many enabled rules ran to reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub result: ValidationResult,
    pub checks_run: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleStatus {
    pub check_id: &'static str,
    pub reason: ReasonCode,
    pub enabled: bool,
}

impl Default for QueryGuard {
    fn default() -> Self {
        Self::new(GuardPolicy::default()).expect("built-in patterns must compile")
    }
}

impl QueryGuard {
    pub fn new(policy: GuardPolicy) -> Result<Self, PatternError> {
        let patterns = CompiledPatterns::compile(&policy)?;
        Ok(Self { policy, patterns })
    }

    pub fn policy(&self) -> &GuardPolicy {
        &self.policy
    }

    /// First failing rule wins.
    pub fn validate(&self, query_text: &str, target_id: i64) -> ValidationResult {
        self.evaluate(query_text, target_id).result
    }

    pub fn validate_request(&self, request: &ValidationRequest) -> ValidationResult {
        self.validate(&request.query_text, request.target_id)
    }

    pub fn evaluate(&self, query_text: &str, target_id: i64) -> Evaluation {
        let input = Candidate {
            text: query_text,
            target_id,
        };
        let ctx = self.context();

        let mut checks_run = 0;
        for rule in RULES.iter().filter(|r| self.policy.is_enabled(r.check_id)) {
            checks_run += 1;
            if let Some(rejection) = rule.evaluate(&input, &ctx) {
                tracing::debug!(
                    check_id = rule.check_id,
                    reason = %rejection.reason,
                    query_sha256 = %query_fingerprint(query_text),
                    "query rejected"
                );
                return Evaluation {
                    result: ValidationResult::Rejected(rejection),
                    checks_run,
                };
            }
        }

        tracing::trace!(checks_run, "query accepted");
        Evaluation {
            result: ValidationResult::Accepted,
            checks_run,
        }
    }

    /// Every failing enabled rule, in rule order. The first entry is what `validate` reports.
    pub fn audit(&self, query_text: &str, target_id: i64) -> Vec<Rejection> {
        let input = Candidate {
            text: query_text,
            target_id,
        };
        let ctx = self.context();

        RULES
            .iter()
            .filter(|r| self.policy.is_enabled(r.check_id))
            .filter_map(|r| r.evaluate(&input, &ctx))
            .collect()
    }

    /// Validate and, on success, hand back a query that may be forwarded to the backend.
    pub fn accept(&self, query_text: &str, target_id: i64) -> Result<ValidatedQuery, Rejection> {
        match self.validate(query_text, target_id) {
            ValidationResult::Accepted => Ok(ValidatedQuery::new(query_text, target_id)),
            ValidationResult::Rejected(r) => Err(r),
        }
    }

    /// The ordered rule set with this guard's enable flags.
    pub fn rules(&self) -> Vec<RuleStatus> {
        RULES
            .iter()
            .map(|r| RuleStatus {
                check_id: r.check_id,
                reason: r.reason,
                enabled: self.policy.is_enabled(r.check_id),
            })
            .collect()
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext {
            policy: &self.policy,
            patterns: &self.patterns,
        }
    }
}
