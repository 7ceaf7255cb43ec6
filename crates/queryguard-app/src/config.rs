use anyhow::Context;
use queryguard_settings::{Overrides, QueryguardConfigV1, ResolvedConfig};

/// `config_source` recorded when no config file was read.
pub const CONFIG_SOURCE_DEFAULTS: &str = "defaults";

/// Parse and resolve config text. Empty text means built-in defaults.
pub fn resolve_guard(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        QueryguardConfigV1::default()
    } else {
        queryguard_settings::parse_config_toml(config_text).context("parse config")?
    };
    queryguard_settings::resolve_config(cfg, overrides).context("resolve config")
}
