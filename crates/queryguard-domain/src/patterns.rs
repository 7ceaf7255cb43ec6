//! Compiled pattern lists. Built once per guard; matching never allocates patterns.

use crate::policy::GuardPolicy;
use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid {list} pattern `{pattern}`: {source}")]
    Invalid {
        list: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{list} keyword list must not be empty")]
    EmptyKeywords { list: &'static str },

    #[error("{list} keyword list contains a blank entry")]
    BlankKeyword { list: &'static str },
}

#[derive(Clone, Debug)]
pub struct CompiledPatterns {
    pub markup: Vec<Regex>,
    pub suspicious: Vec<Regex>,
    /// `None` when no chained keywords are configured.
    pub chained: Option<Regex>,
    pub required: Regex,
}

impl CompiledPatterns {
    pub fn compile(policy: &GuardPolicy) -> Result<Self, PatternError> {
        let markup = compile_all("markup", &policy.markup_patterns)?;
        let suspicious = compile_all("suspicious", &policy.suspicious_patterns)?;

        let chained = if policy.chained_keywords.is_empty() {
            None
        } else {
            let alternation = keyword_alternation("chained", &policy.chained_keywords)?;
            Some(compile("chained", &format!(r"(?i);\s*(?:{alternation})\b"))?)
        };

        if policy.required_keywords.is_empty() {
            return Err(PatternError::EmptyKeywords { list: "required" });
        }
        let alternation = keyword_alternation("required", &policy.required_keywords)?;
        let required = compile("required", &format!(r"(?i)\b(?:{alternation})\b"))?;

        Ok(Self {
            markup,
            suspicious,
            chained,
            required,
        })
    }
}

fn compile_all(list: &'static str, sources: &[String]) -> Result<Vec<Regex>, PatternError> {
    sources.iter().map(|s| compile(list, s)).collect()
}

fn compile(list: &'static str, source: &str) -> Result<Regex, PatternError> {
    Regex::new(source).map_err(|e| PatternError::Invalid {
        list,
        pattern: source.to_string(),
        source: e,
    })
}

/// Keywords are literals, not regex: escape them and join into one alternation.
fn keyword_alternation(list: &'static str, keywords: &[String]) -> Result<String, PatternError> {
    let mut parts = Vec::with_capacity(keywords.len());
    for kw in keywords {
        let kw = kw.trim();
        if kw.is_empty() {
            return Err(PatternError::BlankKeyword { list });
        }
        parts.push(regex::escape(kw));
    }
    Ok(parts.join("|"))
}
