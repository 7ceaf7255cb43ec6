//! Stable identifiers for checks and reason codes.
//!
//! `check_id` is a dotted namespace. Reason codes are the SCREAMING_SNAKE_CASE tokens callers
//! switch on; several checks may share one reason code.

// Checks, in evaluation order.
pub const CHECK_QUERY_NON_EMPTY: &str = "query.non_empty";
pub const CHECK_QUERY_MAX_LENGTH: &str = "query.max_length";
pub const CHECK_QUERY_UNSAFE_MARKUP: &str = "query.unsafe_markup";
pub const CHECK_QUERY_CHAINED_STATEMENT: &str = "query.chained_statement";
pub const CHECK_QUERY_COMMENT_MARKERS: &str = "query.comment_markers";
pub const CHECK_QUERY_STATEMENT_KEYWORD: &str = "query.statement_keyword";
pub const CHECK_TARGET_POSITIVE_ID: &str = "target.positive_id";

// Reason codes
pub const REASON_EMPTY: &str = "EMPTY";
pub const REASON_TOO_LONG: &str = "TOO_LONG";
pub const REASON_UNSAFE_MARKUP: &str = "UNSAFE_MARKUP";
pub const REASON_SUSPICIOUS_PATTERN: &str = "SUSPICIOUS_PATTERN";
pub const REASON_NOT_SQL: &str = "NOT_SQL";
pub const REASON_INVALID_TARGET: &str = "INVALID_TARGET";
