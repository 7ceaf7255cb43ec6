use crate::model::{PatternsConfig, QueryguardConfigV1, SCHEMA_CONFIG_V1};
use anyhow::Context;
use queryguard_domain::policy::{CheckPolicy, GuardPolicy};
use queryguard_domain::QueryGuard;
use queryguard_types::explain::all_check_ids;

/// Values supplied on the command line. They win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub max_length: Option<usize>,
    pub max_comment_markers: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: GuardPolicy,
    pub guard: QueryGuard,
}

pub fn resolve_config(
    cfg: QueryguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut policy = GuardPolicy::default();

    if let Some(max) = overrides.max_length.or(cfg.max_length) {
        if max == 0 {
            anyhow::bail!("max_length must be at least 1");
        }
        policy.max_length = max;
    }
    if let Some(max) = overrides.max_comment_markers.or(cfg.max_comment_markers) {
        policy.max_comment_markers = max;
    }

    apply_patterns(&mut policy, cfg.patterns);

    for (check_id, cc) in cfg.checks {
        if !all_check_ids().contains(&check_id.as_str()) {
            anyhow::bail!(
                "unknown check id in [checks]: {check_id} (known: {})",
                all_check_ids().join(", ")
            );
        }
        if let Some(enabled) = cc.enabled {
            let entry = if enabled {
                CheckPolicy::enabled()
            } else {
                CheckPolicy::disabled()
            };
            policy.checks.insert(check_id, entry);
        }
    }

    let guard = QueryGuard::new(policy.clone()).context("invalid [patterns] configuration")?;
    Ok(ResolvedConfig { policy, guard })
}

fn apply_patterns(policy: &mut GuardPolicy, patterns: PatternsConfig) {
    if let Some(markup) = patterns.markup {
        policy.markup_patterns = markup;
    }
    if let Some(suspicious) = patterns.suspicious {
        policy.suspicious_patterns = suspicious;
    }
    if let Some(chained) = patterns.chained_keywords {
        policy.chained_keywords = chained;
    }
    if let Some(required) = patterns.required_keywords {
        policy.required_keywords = required;
    }
}
