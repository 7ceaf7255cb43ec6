//! The `validate` use case: resolve config, run the guard, produce a report.

use queryguard_domain::fingerprint::query_fingerprint;
use queryguard_domain::{QueryGuard, ValidatedQuery};
use queryguard_settings::{Overrides, ResolvedConfig};
use queryguard_types::{GuardData, GuardReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

use crate::config::resolve_guard;

/// Input for the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Recorded in the report: `defaults` or the config path.
    pub config_source: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub query_text: &'a str,
    pub target_id: i64,
    /// Report every failing check instead of stopping at the first.
    pub audit: bool,
}

#[derive(Clone, Debug)]
pub struct ValidateOutput {
    pub report: GuardReport,
    /// Present iff the verdict is `accepted`.
    pub accepted: Option<ValidatedQuery>,
    pub resolved_config: ResolvedConfig,
}

pub fn run_validate(input: ValidateInput<'_>) -> anyhow::Result<ValidateOutput> {
    let resolved = resolve_guard(input.config_text, input.overrides.clone())?;
    tracing::debug!(config_source = input.config_source, "resolved guard policy");

    let (report, accepted) = validate_with(
        &resolved.guard,
        input.config_source,
        input.query_text,
        input.target_id,
        input.audit,
    );

    Ok(ValidateOutput {
        report,
        accepted,
        resolved_config: resolved,
    })
}

/// Validate one query with an already resolved guard.
pub(crate) fn validate_with(
    guard: &QueryGuard,
    config_source: &str,
    query_text: &str,
    target_id: i64,
    audit: bool,
) -> (GuardReport, Option<ValidatedQuery>) {
    let started_at = OffsetDateTime::now_utc();

    let (rejections, checks_run) = if audit {
        let enabled = guard.rules().iter().filter(|r| r.enabled).count();
        (
            guard.audit(query_text, target_id),
            u32::try_from(enabled).unwrap_or(u32::MAX),
        )
    } else {
        let eval = guard.evaluate(query_text, target_id);
        (eval.result.rejection().cloned().into_iter().collect(), eval.checks_run)
    };

    let accepted = if rejections.is_empty() {
        guard.accept(query_text, target_id).ok()
    } else {
        None
    };
    let verdict = if rejections.is_empty() {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    };

    let report = GuardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "queryguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        rejections,
        data: GuardData {
            target_id,
            query_chars: query_text.chars().count() as u64,
            query_sha256: query_fingerprint(query_text),
            checks_run,
            config_source: config_source.to_string(),
        },
    };
    (report, accepted)
}

/// Map verdict to exit code: 0 = accepted, 2 = rejected.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Accepted => 0,
        Verdict::Rejected => 2,
    }
}
