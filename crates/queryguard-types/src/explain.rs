//! Explain registry for checks and reason codes.
//!
//! Maps check IDs and reason codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or reason code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to get a rejected query through.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would be rejected.
    pub before: &'static str,
    /// Input that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or reason code.
///
/// Reason codes match in any ASCII case. Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_QUERY_NON_EMPTY => return Some(explain_non_empty()),
        ids::CHECK_QUERY_MAX_LENGTH => return Some(explain_max_length()),
        ids::CHECK_QUERY_UNSAFE_MARKUP => return Some(explain_unsafe_markup()),
        ids::CHECK_QUERY_CHAINED_STATEMENT => return Some(explain_chained_statement()),
        ids::CHECK_QUERY_COMMENT_MARKERS => return Some(explain_comment_markers()),
        ids::CHECK_QUERY_STATEMENT_KEYWORD => return Some(explain_statement_keyword()),
        ids::CHECK_TARGET_POSITIVE_ID => return Some(explain_positive_target()),
        _ => {}
    }

    let code = identifier.to_ascii_uppercase();
    match code.as_str() {
        ids::REASON_EMPTY => Some(explain_reason_empty()),
        ids::REASON_TOO_LONG => Some(explain_reason_too_long()),
        ids::REASON_UNSAFE_MARKUP => Some(explain_reason_unsafe_markup()),
        ids::REASON_SUSPICIOUS_PATTERN => Some(explain_reason_suspicious_pattern()),
        ids::REASON_NOT_SQL => Some(explain_reason_not_sql()),
        ids::REASON_INVALID_TARGET => Some(explain_reason_invalid_target()),
        _ => None,
    }
}

/// List all known check IDs, in evaluation order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_QUERY_NON_EMPTY,
        ids::CHECK_QUERY_MAX_LENGTH,
        ids::CHECK_QUERY_UNSAFE_MARKUP,
        ids::CHECK_QUERY_CHAINED_STATEMENT,
        ids::CHECK_QUERY_COMMENT_MARKERS,
        ids::CHECK_QUERY_STATEMENT_KEYWORD,
        ids::CHECK_TARGET_POSITIVE_ID,
    ]
}

/// List all known reason codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::REASON_EMPTY,
        ids::REASON_TOO_LONG,
        ids::REASON_UNSAFE_MARKUP,
        ids::REASON_SUSPICIOUS_PATTERN,
        ids::REASON_NOT_SQL,
        ids::REASON_INVALID_TARGET,
    ]
}

// --- Check-level explanations ---

fn explain_non_empty() -> Explanation {
    Explanation {
        title: "Query Must Not Be Empty",
        description: "\
Rejects a query whose text is empty or consists only of whitespace.

There is nothing to translate, and forwarding blank input only produces a backend error.
This check runs first, so empty input always reports EMPTY whatever else is wrong with it.",
        remediation: "\
Type or paste the SQL statement to translate before submitting.",
        examples: ExamplePair {
            before: "   ",
            after: "SELECT * FROM users",
        },
    }
}

fn explain_max_length() -> Explanation {
    Explanation {
        title: "Query Length Limit",
        description: "\
Rejects a query longer than the configured maximum (10000 characters by default).

Length is counted in characters, not bytes. The limit bounds the work every later
pattern scan does and keeps oversized payloads away from the backend.",
        remediation: "\
Split the work into smaller statements, or raise `max_length` in queryguard.toml
if your deployment genuinely needs longer queries.",
        examples: ExamplePair {
            before: "SELECT * FROM users WHERE SELECT * FROM users WHERE ... (10001+ characters)",
            after: "SELECT * FROM users WHERE age > 25",
        },
    }
}

fn explain_unsafe_markup() -> Explanation {
    Explanation {
        title: "Unsafe Markup",
        description: "\
Rejects a query containing markup or script-injection shapes:
- an opening <script or <iframe tag
- a javascript: URI
- an inline event handler such as onclick= or onerror=
- an <img tag carrying a src attribute

Matching is a case-insensitive pattern search, not HTML parsing. False positives are
accepted: a literal that merely looks like markup is still refused.",
        remediation: "\
Remove the markup from the query. If you need to search for such text, do it through
a parameter in the backend rather than inline in the SQL.",
        examples: ExamplePair {
            before: r#"SELECT * FROM users WHERE name = "<script>alert(1)</script>""#,
            after: r#"SELECT * FROM users WHERE name = 'alice'"#,
        },
    }
}

fn explain_chained_statement() -> Explanation {
    Explanation {
        title: "Chained Destructive Statement",
        description: "\
Rejects a query where a statement separator (;) is followed by DROP, DELETE, TRUNCATE
or ALTER, and any query containing UNION ALL SELECT.

Both are classic injection shapes: a harmless-looking statement smuggling a destructive
one, or a UNION that splices data from another table into the result.",
        remediation: "\
Submit one statement at a time. Rewrite UNION ALL SELECT queries as separate queries or
use UNION without ALL if the combination is intentional.",
        examples: ExamplePair {
            before: "SELECT * FROM users; DROP TABLE users",
            after: "SELECT * FROM users",
        },
    }
}

fn explain_comment_markers() -> Explanation {
    Explanation {
        title: "Excessive Inline Comments",
        description: "\
Rejects a query with more `--` line-comment markers than allowed (2 by default).

Comment markers are a common way to cut off the tail of an injected statement. The
count is heuristic: three harmless trailing comments are rejected too.",
        remediation: "\
Remove comments before submitting, or raise `max_comment_markers` in queryguard.toml.",
        examples: ExamplePair {
            before: "-- Comment 1\n-- Comment 2\nSELECT * FROM users\n-- Comment 3",
            after: "-- Comment 1\nSELECT * FROM users\n-- Comment 2",
        },
    }
}

fn explain_statement_keyword() -> Explanation {
    Explanation {
        title: "SQL Statement Keyword Required",
        description: "\
Rejects text that does not contain, as a whole word, any of SELECT, INSERT, UPDATE,
DELETE, CREATE, ALTER, DROP or TRUNCATE (case-insensitive).

This is the most permissive gate: it only confirms the text plausibly is SQL. It does
not parse the statement.",
        remediation: "\
Submit a SQL statement. Natural-language descriptions are not translated.",
        examples: ExamplePair {
            before: "This is just plain text without SQL keywords",
            after: "SELECT name FROM users",
        },
    }
}

fn explain_positive_target() -> Explanation {
    Explanation {
        title: "Target Connection Required",
        description: "\
Rejects a request whose target connection identifier is zero or negative.

This check runs last, so a query that is otherwise valid surfaces INVALID_TARGET
rather than an earlier reason.",
        remediation: "\
Select a graph database connection before submitting the query.",
        examples: ExamplePair {
            before: "target_id = -1",
            after: "target_id = 1",
        },
    }
}

// --- Reason-level explanations ---

fn explain_reason_empty() -> Explanation {
    Explanation {
        title: "EMPTY",
        description: "The query text was empty or whitespace only (check query.non_empty).",
        remediation: "Provide a SQL statement.",
        examples: ExamplePair {
            before: "",
            after: "SELECT 1",
        },
    }
}

fn explain_reason_too_long() -> Explanation {
    Explanation {
        title: "TOO_LONG",
        description: "The query exceeded the maximum length (check query.max_length).",
        remediation: "Shorten the query or raise `max_length`.",
        examples: ExamplePair {
            before: "(a query of 10001 characters)",
            after: "SELECT * FROM users",
        },
    }
}

fn explain_reason_unsafe_markup() -> Explanation {
    Explanation {
        title: "UNSAFE_MARKUP",
        description: "The query contained markup or a script-injection shape (check query.unsafe_markup).",
        remediation: "Remove tags, javascript: URIs and event-handler attributes from the query.",
        examples: ExamplePair {
            before: r#"SELECT * FROM users WHERE url = "javascript:alert(1)""#,
            after: "SELECT * FROM users WHERE url = 'https://example.com'",
        },
    }
}

fn explain_reason_suspicious_pattern() -> Explanation {
    Explanation {
        title: "SUSPICIOUS_PATTERN",
        description: "\
The query matched an injection heuristic. Two checks report this code:
- query.chained_statement: a destructive statement after `;`, or UNION ALL SELECT
- query.comment_markers: too many `--` comment markers

The message tells the two apart.",
        remediation: "Submit a single statement and strip excess comments.",
        examples: ExamplePair {
            before: "SELECT * FROM users WHERE id = 1 UNION ALL SELECT password FROM admins--",
            after: "SELECT * FROM users WHERE id = 1",
        },
    }
}

fn explain_reason_not_sql() -> Explanation {
    Explanation {
        title: "NOT_SQL",
        description: "No SQL statement keyword was found (check query.statement_keyword).",
        remediation: "Submit a SQL statement.",
        examples: ExamplePair {
            before: "just plain text",
            after: "SELECT * FROM users",
        },
    }
}

fn explain_reason_invalid_target() -> Explanation {
    Explanation {
        title: "INVALID_TARGET",
        description: "The target connection identifier was not a positive integer (check target.positive_id).",
        remediation: "Select a valid connection.",
        examples: ExamplePair {
            before: "target_id = 0",
            after: "target_id = 7",
        },
    }
}
