//! The `rules` use case: list the ordered rule set under the resolved config.

use queryguard_domain::RuleStatus;
use queryguard_settings::Overrides;

use crate::config::resolve_guard;

pub fn run_rules(config_text: &str, overrides: Overrides) -> anyhow::Result<Vec<RuleStatus>> {
    Ok(resolve_guard(config_text, overrides)?.guard.rules())
}

/// One line per rule: position, check id, reason code, state.
pub fn format_rules(rules: &[RuleStatus]) -> String {
    let width = rules.iter().map(|r| r.check_id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, r) in rules.iter().enumerate() {
        let state = if r.enabled { "enabled" } else { "disabled" };
        out.push_str(&format!(
            "{}. {:<width$}  {:<18}  {}\n",
            i + 1,
            r.check_id,
            r.reason.as_str(),
            state,
        ));
    }
    out
}
