use std::collections::BTreeMap;

pub const DEFAULT_MAX_LENGTH: usize = 10_000;
pub const DEFAULT_MAX_COMMENT_MARKERS: usize = 2;

/// Line-comment marker counted by `query.comment_markers`.
pub const COMMENT_MARKER: &str = "--";

/// Markup and script-injection shapes. Case-insensitive search, not HTML parsing.
pub const DEFAULT_MARKUP_PATTERNS: &[&str] = &[
    r"(?i)<\s*script\b",
    r"(?i)<\s*iframe\b",
    r"(?i)javascript\s*:",
    r"(?i)\bon\w+\s*=",
    r"(?i)<\s*img\b[^>]*\bsrc\b",
];

/// Injection shapes that are suspicious anywhere in the text.
pub const DEFAULT_SUSPICIOUS_PATTERNS: &[&str] = &[r"(?i)\bunion\s+all\s+select\b"];

/// Statements that must not follow a `;` separator.
pub const DEFAULT_CHAINED_KEYWORDS: &[&str] = &["DROP", "DELETE", "TRUNCATE", "ALTER"];

/// At least one of these must appear as a whole word.
pub const DEFAULT_REQUIRED_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER", "DROP", "TRUNCATE",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// Tuning knobs for the guard. Changing them never changes rule order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Maximum query length in characters (Unicode scalar values).
    pub max_length: usize,
    pub max_comment_markers: usize,
    /// Regex sources for `query.unsafe_markup`.
    pub markup_patterns: Vec<String>,
    /// Regex sources for `query.chained_statement`, matched anywhere.
    pub suspicious_patterns: Vec<String>,
    /// Plain keywords for `query.chained_statement`, matched after a `;`.
    pub chained_keywords: Vec<String>,
    /// Plain keywords for `query.statement_keyword`.
    pub required_keywords: Vec<String>,
    /// Per-check overrides keyed by check id. Absent means enabled.
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            max_comment_markers: DEFAULT_MAX_COMMENT_MARKERS,
            markup_patterns: owned(DEFAULT_MARKUP_PATTERNS),
            suspicious_patterns: owned(DEFAULT_SUSPICIOUS_PATTERNS),
            chained_keywords: owned(DEFAULT_CHAINED_KEYWORDS),
            required_keywords: owned(DEFAULT_REQUIRED_KEYWORDS),
            checks: BTreeMap::new(),
        }
    }
}

impl GuardPolicy {
    pub fn is_enabled(&self, check_id: &str) -> bool {
        self.checks.get(check_id).is_none_or(|p| p.enabled)
    }

    pub fn with_check(mut self, check_id: &str, policy: CheckPolicy) -> Self {
        self.checks.insert(check_id.to_string(), policy);
        self
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use queryguard_types::ids;

    #[test]
    fn checks_default_to_enabled() {
        let policy = GuardPolicy::default();
        assert!(policy.is_enabled(ids::CHECK_QUERY_COMMENT_MARKERS));
    }

    #[test]
    fn explicit_override_disables_check() {
        let policy = GuardPolicy::default()
            .with_check(ids::CHECK_QUERY_COMMENT_MARKERS, CheckPolicy::disabled());
        assert!(!policy.is_enabled(ids::CHECK_QUERY_COMMENT_MARKERS));
        assert!(policy.is_enabled(ids::CHECK_QUERY_NON_EMPTY));
    }
}
