//! Fuzz target for `Sanitizer::sanitize`.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic
//! 2. Non-empty output always validates under the same rules
//! 3. Output never exceeds the byte limit
//! 4. Sanitizing the output again changes nothing
//!
//! Run with: `cargo +nightly fuzz run fuzz_sanitize`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pathvalidate::{Platform, RuleSet, Sanitizer, validate};

const PLATFORMS: [Platform; 5] = [
    Platform::Posix,
    Platform::Linux,
    Platform::MacOs,
    Platform::Windows,
    Platform::Universal,
];

#[derive(Arbitrary, Debug)]
struct SanitizeInput {
    value: String,
    platform: u8,
    filename: bool,
    normalize: bool,
    /// Zero means "platform limit".
    max_length: u16,
    replacement: String,
}

impl SanitizeInput {
    fn rules(&self) -> RuleSet {
        let platform = PLATFORMS[usize::from(self.platform) % PLATFORMS.len()];
        let max_length = (self.max_length > 0).then_some(usize::from(self.max_length));
        RuleSet::new(platform)
            .with_filename(self.filename)
            .with_normalize(self.normalize)
            .with_max_length(max_length)
    }
}

fuzz_target!(|input: SanitizeInput| {
    let rules = input.rules();
    // Replacement text containing forbidden characters is rejected up front.
    let Ok(sanitizer) = Sanitizer::new(rules.clone(), input.replacement.as_str()) else {
        return;
    };

    let Ok(sanitized) = sanitizer.sanitize(&input.value) else {
        panic!("sanitize failed without validate-after-sanitize: {:?}", input);
    };

    assert!(
        sanitized.len() <= rules.max_length(),
        "{:?} -> {:?} exceeds {} bytes",
        input.value,
        sanitized,
        rules.max_length()
    );

    if !sanitized.is_empty() {
        if let Err(violations) = validate(&sanitized, &rules) {
            panic!("{:?} -> {:?} still invalid: {}", input.value, sanitized, violations);
        }
    }

    let again = sanitizer.sanitize(&sanitized).expect("second pass");
    assert_eq!(again, sanitized, "sanitize is not idempotent for {:?}", input.value);
});
