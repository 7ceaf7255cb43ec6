//! Pure query validation (no IO).
//!
//! Input: candidate SQL text plus a target connection id.
//! Output: accepted, or the first failing rule's rejection.

#![forbid(unsafe_code)]

pub mod connection;
pub mod fingerprint;
pub mod patterns;
pub mod policy;
pub mod rules;

mod engine;
mod validated;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{Evaluation, QueryGuard, RuleStatus, validate};
pub use patterns::PatternError;
pub use policy::{CheckPolicy, GuardPolicy};
pub use validated::ValidatedQuery;
