//! Fuzz target for the query guard.
//!
//! Goal: validation **never panics**, and the single verdict always agrees with the first entry
//! of a full audit.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use queryguard_domain::QueryGuard;
use std::sync::LazyLock;

static GUARD: LazyLock<QueryGuard> = LazyLock::new(QueryGuard::default);

#[derive(Arbitrary, Debug)]
struct GuardInput {
    query_text: String,
    target_id: i64,
}

fuzz_target!(|input: GuardInput| {
    let result = GUARD.validate(&input.query_text, input.target_id);
    let audit = GUARD.audit(&input.query_text, input.target_id);
    assert_eq!(result.rejection(), audit.first());
});
