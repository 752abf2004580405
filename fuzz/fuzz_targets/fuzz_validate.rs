//! Fuzz target for `validate`.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic
//! 2. Reported positions fall on character boundaries
//! 3. Only the empty string reports NULL_NAME
//!
//! Run with: `cargo +nightly fuzz run fuzz_validate`

#![no_main]

use libfuzzer_sys::fuzz_target;
use pathvalidate::{Platform, Reason, RuleSet, validate};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = std::str::from_utf8(data) else {
        return;
    };

    for platform in [Platform::Linux, Platform::MacOs, Platform::Windows, Platform::Universal] {
        for filename in [false, true] {
            let rules = RuleSet::new(platform).with_filename(filename);
            let Err(violations) = validate(value, &rules) else {
                assert!(!value.is_empty());
                continue;
            };

            assert_eq!(violations.contains(Reason::NullName), value.is_empty());
            for violation in &violations {
                if let Some(position) = violation.position {
                    assert!(value.is_char_boundary(position), "{:?}: {}", value, violation);
                }
            }
        }
    }
});
