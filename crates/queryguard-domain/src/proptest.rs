//! Property-based tests for the validation pipeline.
//!
//! Invariants covered:
//! - Rule precedence (emptiness, then length, then markup, then target)
//! - Determinism and agreement between `validate` and `audit`
//! - Everything accepted satisfies every default constraint

use crate::policy::{COMMENT_MARKER, DEFAULT_MAX_COMMENT_MARKERS, DEFAULT_MAX_LENGTH};
use crate::test_support::guard;
use queryguard_types::{ReasonCode, ValidationResult};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_whitespace() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\r\n]{0,64}").unwrap()
}

fn arb_ident() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,15}").unwrap()
}

fn arb_markup() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("<script>".to_string()),
        Just("<IFRAME src=x>".to_string()),
        Just("javascript:void(0)".to_string()),
        Just("onerror=alert(1)".to_string()),
        Just("<img src=x>".to_string()),
    ]
}

fn arb_target() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), Just(1), Just(-1), any::<i64>()]
}

fn select_of(col: &str, table: &str) -> String {
    format!("SELECT {col} FROM {table}")
}

// ============================================================================
// Precedence
// ============================================================================

proptest! {
    #[test]
    fn blank_text_is_always_empty(text in arb_whitespace(), target in arb_target()) {
        prop_assert_eq!(guard().validate(&text, target).reason(), Some(ReasonCode::Empty));
    }

    #[test]
    fn oversized_text_is_too_long(
        prefix in arb_markup(),
        extra in 1usize..64,
        target in arb_target(),
    ) {
        let text = format!("{prefix}{}", "a".repeat(DEFAULT_MAX_LENGTH + extra));
        prop_assert_eq!(guard().validate(&text, target).reason(), Some(ReasonCode::TooLong));
    }

    #[test]
    fn markup_beats_target_and_keyword(
        col in arb_ident(),
        table in arb_ident(),
        markup in arb_markup(),
        target in arb_target(),
    ) {
        let text = format!("{} WHERE x = '{markup}'", select_of(&col, &table));
        prop_assert_eq!(guard().validate(&text, target).reason(), Some(ReasonCode::UnsafeMarkup));
    }

    #[test]
    fn clean_select_depends_only_on_target(
        col in arb_ident(),
        table in arb_ident(),
        target in any::<i64>(),
    ) {
        let text = select_of(&col, &table);
        let result = guard().validate(&text, target);
        if target > 0 {
            prop_assert_eq!(result, ValidationResult::Accepted);
        } else {
            prop_assert_eq!(result.reason(), Some(ReasonCode::InvalidTarget));
        }
    }
}

// ============================================================================
// Pipeline consistency
// ============================================================================

proptest! {
    #[test]
    fn validation_is_deterministic(text in any::<String>(), target in arb_target()) {
        let g = guard();
        prop_assert_eq!(g.validate(&text, target), g.validate(&text, target));
    }

    #[test]
    fn audit_leads_with_the_validate_rejection(text in any::<String>(), target in arb_target()) {
        let g = guard();
        let audit = g.audit(&text, target);
        match g.validate(&text, target) {
            ValidationResult::Accepted => prop_assert!(audit.is_empty()),
            ValidationResult::Rejected(r) => prop_assert_eq!(audit.first(), Some(&r)),
        }
    }

    #[test]
    fn checks_run_stays_within_rule_count(text in any::<String>(), target in arb_target()) {
        let eval = guard().evaluate(&text, target);
        prop_assert!((1..=7).contains(&eval.checks_run));
        if eval.result.is_accepted() {
            prop_assert_eq!(eval.checks_run, 7);
        }
    }

    #[test]
    fn accepted_input_meets_every_default_limit(text in any::<String>(), target in arb_target()) {
        if guard().validate(&text, target).is_accepted() {
            prop_assert!(!text.trim().is_empty());
            prop_assert!(text.chars().count() <= DEFAULT_MAX_LENGTH);
            prop_assert!(text.matches(COMMENT_MARKER).count() <= DEFAULT_MAX_COMMENT_MARKERS);
            prop_assert!(target > 0);
        }
    }
}
