//! Fuzz target for `queryguard.toml` parsing and resolution.
//!
//! Goal: parsing and resolution (including compiling user-supplied patterns) **never panic**.
//! Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use queryguard_settings::{Overrides, parse_config_toml, resolve_config};

fuzz_target!(|data: &[u8]| {
    // Limit input size to keep regex compilation fast
    if data.len() > 4096 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = parse_config_toml(text) {
        let _ = resolve_config(cfg, Overrides::default());
    }
});
