//! The `explain` use case: look up check/reason documentation.

use queryguard_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the known check ids and reason codes.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\nRemediation\n-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\nExamples\n--------\n\n");
    push_example(&mut out, "Rejected:", exp.examples.before);
    out.push('\n');
    push_example(&mut out, "Accepted:", exp.examples.after);

    out
}

fn push_example(out: &mut String, label: &str, body: &str) {
    out.push_str(label);
    out.push_str("\n```sql\n");
    out.push_str(body);
    out.push_str("\n```\n");
}

pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = format!("Unknown check_id or reason code: {identifier}\n\nAvailable check_ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {id}\n"));
    }
    out.push_str("\nAvailable reason codes:\n");
    for code in codes {
        out.push_str(&format!("  - {code}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(identifier: &str) -> Explanation {
        match run_explain(identifier) {
            ExplainOutput::Found(exp) => exp,
            ExplainOutput::NotFound { .. } => panic!("expected an explanation for {identifier}"),
        }
    }

    #[test]
    fn explains_check_ids_and_codes() {
        found("query.unsafe_markup");
        found("SUSPICIOUS_PATTERN");
        found("not_sql");
    }

    #[test]
    fn unknown_identifier_lists_alternatives() {
        match run_explain("query.nope") {
            ExplainOutput::NotFound {
                identifier,
                available_check_ids,
                available_codes,
            } => {
                assert_eq!(identifier, "query.nope");
                assert_eq!(available_check_ids.len(), 7);
                assert_eq!(available_codes.len(), 6);
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn formatted_explanation_has_sql_examples() {
        let formatted = format_explanation(&found("query.chained_statement"));
        assert!(formatted.contains("Remediation"));
        assert_eq!(formatted.matches("```sql").count(), 2);
        assert!(formatted.contains("Rejected:"));
        assert!(formatted.contains("Accepted:"));
    }

    #[test]
    fn not_found_output() {
        let formatted = format_not_found("missing", &["query.one"], &["CODE_ONE"]);
        assert!(formatted.starts_with("Unknown check_id or reason code: missing"));
        assert!(formatted.contains("  - query.one\n"));
        assert!(formatted.contains("  - CODE_ONE\n"));
    }
}
