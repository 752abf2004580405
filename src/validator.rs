//! File name and file path validation.
//!
//! Validation accumulates every violation instead of stopping at the first
//! one, in this order:
//!
//! 1. structure: separators in file names, drive/UNC prefixes
//! 2. each name (the whole file name, or each path component, left to right):
//!    control characters, invalid characters, reserved names, trailing
//!    period/space, empty components
//! 3. lengths, counted in UTF-8 bytes
//!
//! # Examples
//!
//! ```
//! use pathvalidate::{Platform, Reason, RuleSet, validate};
//!
//! let rules = RuleSet::new(Platform::Windows).with_filename(true);
//!
//! assert!(validate("report.txt", &rules).is_ok());
//!
//! let violations = validate("Con.txt", &rules).unwrap_err();
//! assert!(violations.contains(Reason::ReservedName));
//! ```

use tracing::trace;

use crate::reason::{Reason, Violation, Violations};
use crate::rules::windows::Drive;
use crate::rules::{Layout, PlatformRules, Prefix, RuleSet};

/// Result of a validation: `Ok(())` or the ordered violations.
pub type ValidationResult = Result<(), Violations>;

/// Validate `input` against `rules`.
///
/// # Errors
///
/// Returns the non-empty list of violations when the input is not legal.
pub fn validate(input: &str, rules: &RuleSet) -> ValidationResult {
    Validator::new(rules).validate(input)
}

/// Validator bound to one rule set.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    rules: &'r RuleSet,
    platform: &'static PlatformRules,
}

impl<'r> Validator<'r> {
    #[must_use]
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rules,
            platform: rules.platform_rules(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// Validate one file name or path.
    ///
    /// # Errors
    ///
    /// Returns the non-empty list of violations when the input is not legal.
    pub fn validate(&self, input: &str) -> ValidationResult {
        let mut found = Vec::new();

        if input.is_empty() {
            found.push(Violation::new(Reason::NullName));
        } else if self.rules.is_filename() {
            self.check_filename(input, &mut found);
        } else {
            self.check_path(input, &mut found);
        }

        trace!(
            input = %input,
            platform = %self.rules.platform(),
            violations = found.len(),
            "Validated"
        );

        match Violations::from_vec(found) {
            Some(violations) => Err(violations),
            None => Ok(()),
        }
    }

    fn check_filename(&self, input: &str, found: &mut Vec<Violation>) {
        for (i, c) in input.char_indices() {
            if self.platform.is_separator(c) {
                let reason = if i == 0 {
                    Reason::FoundAbsPath
                } else {
                    Reason::SeparatorInFilename
                };
                found.push(Violation::at(reason, c.to_string(), i));
            }
        }

        self.check_name(input, 0, found);

        // A file name is a single component, bounded like a path segment even
        // when the total limit is raised.
        let segment_max = self.rules.segment_max_length();
        if input.len() > segment_max && segment_max < self.rules.max_length() {
            found.push(Violation::at(Reason::InvalidLength, input, 0));
        }
        self.check_total_length(input, found);
    }

    fn check_path(&self, input: &str, found: &mut Vec<Violation>) {
        let layout = Layout::parse(input, self.platform);

        match layout.prefix {
            Prefix::Drive(Drive::Relative) => {
                found.push(Violation::at(Reason::MalformedAbsPath, layout.prefix_text, 0));
            },
            Prefix::Unc => {
                let named = |i: usize| layout.pieces.get(i).is_some_and(|p| !p.text.is_empty());
                if !(named(0) && named(1)) {
                    found.push(Violation::at(Reason::MalformedAbsPath, layout.prefix_text, 0));
                }
            },
            _ => {},
        }

        let trailing = layout.trailing_empty();
        for (i, piece) in layout.pieces.iter().enumerate() {
            if piece.text.is_empty() {
                if Some(i) != trailing {
                    let sep = piece.separator.or(layout.prefix_text.chars().last());
                    let fragment = sep.map(String::from).unwrap_or_default();
                    found.push(Violation::at(Reason::EmptySegment, fragment, piece.start));
                }
                continue;
            }
            self.check_name(piece.text, piece.start, found);
        }

        let segment_max = self.rules.segment_max_length();
        for piece in &layout.pieces {
            if piece.text.len() > segment_max {
                found.push(Violation::at(Reason::InvalidLength, piece.text, piece.start));
            }
        }
        self.check_total_length(input, found);
    }

    /// Character, reserved-name and trailing-character rules for one name.
    fn check_name(&self, name: &str, offset: usize, found: &mut Vec<Violation>) {
        for (i, c) in name.char_indices() {
            if PlatformRules::is_control(c) {
                found.push(Violation::at(Reason::ControlCharacter, c.to_string(), offset + i));
            } else if self.platform.is_invalid_char(c) {
                found.push(Violation::at(Reason::InvalidCharacter, c.to_string(), offset + i));
            }
        }

        let is_filename = self.rules.is_filename();
        if self.rules.check_reserved() && self.platform.is_reserved(name, is_filename) {
            found.push(Violation::at(Reason::ReservedName, name, offset));
        }

        if self.platform.has_illegal_trailing(name, is_filename) {
            let trimmed = name.trim_end_matches(['.', ' ']);
            found.push(Violation::at(
                Reason::InvalidTrailingCharacter,
                &name[trimmed.len()..],
                offset + trimmed.len(),
            ));
        }
    }

    fn check_total_length(&self, input: &str, found: &mut Vec<Violation>) {
        let len = input.len();
        if len > self.rules.max_length() {
            found.push(Violation {
                reason: Reason::InvalidLength,
                fragment: Some(format!("{len} > {} bytes", self.rules.max_length())),
                position: None,
            });
        }
        if len < self.rules.min_length() {
            found.push(Violation {
                reason: Reason::TooShort,
                fragment: Some(format!("{len} < {} bytes", self.rules.min_length())),
                position: None,
            });
        }
    }
}
