//! File name and file path sanitization.
//!
//! The sanitizer rewrites an input so that it passes [`validate`] under the
//! same [`RuleSet`]. Each name (the whole file name, or each path component)
//! goes through the same steps:
//!
//! 1. control and invalid characters (and separators, in filename mode) are
//!    replaced with the replacement text in one left-to-right pass
//! 2. the name is truncated to its byte limit on a character boundary
//! 3. trailing periods and spaces are stripped where the platform forbids them
//! 4. a reserved name gets `_` appended to its stem (`CON.txt` -> `CON_.txt`,
//!    `.` -> `._`)
//!
//! Paths are then reassembled: empty components are dropped, a malformed UNC
//! prefix degrades to a single root separator, a drive-relative `C:foo` gets a
//! separator after the colon, and the whole path is cut to the maximum length
//! without splitting a component into something invalid.
//!
//! # Examples
//!
//! ```
//! use pathvalidate::{Platform, RuleSet, sanitize};
//!
//! let rules = RuleSet::new(Platform::Universal);
//! assert_eq!(sanitize(r#"fi:l*e/p"a?t>h|.t<xt"#, &rules, "").unwrap(), "file/path.txt");
//!
//! let rules = rules.with_filename(true);
//! assert_eq!(sanitize(r#"fi:l*e/p"a?t>h|.t<xt"#, &rules, "").unwrap(), "filepath.txt");
//! ```

mod normalize;

pub use normalize::normalize_path;

use tracing::debug;

use crate::constants::RESERVED_NAME_SUFFIX;
use crate::error::{Error, Result};
use crate::rules::windows::{Drive, device_stem};
use crate::rules::{Layout, PlatformRules, Prefix, RuleSet, is_dot_name};
use crate::validator::validate;

/// Sanitize `input` under `rules`, replacing invalid characters with `replacement`.
///
/// # Errors
///
/// - [`Error::Unsatisfiable`] / [`Error::InvalidReplacement`] for bad configuration
/// - [`Error::SanitizationFailed`] if `validate_after_sanitize` is set and the
///   result still has violations
pub fn sanitize(input: &str, rules: &RuleSet, replacement: &str) -> Result<String> {
    Sanitizer::new(rules.clone(), replacement)?.sanitize(input)
}

/// Sanitizer bound to one rule set and replacement text.
///
/// Construction checks the configuration once, so a batch of inputs can be
/// sanitized without repeating the checks.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    rules: RuleSet,
    platform: &'static PlatformRules,
    replacement: String,
}

/// A path component after sanitization, with the separator that preceded it.
struct Component {
    separator: Option<char>,
    name: String,
}

impl Sanitizer {
    /// Create a sanitizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsatisfiable`] if no legal value exists under `rules`,
    /// and [`Error::InvalidReplacement`] if the replacement text contains a
    /// separator, control or invalid character.
    pub fn new(rules: RuleSet, replacement: impl Into<String>) -> Result<Self> {
        rules.check_satisfiable()?;

        let platform = rules.platform_rules();
        let replacement = replacement.into();
        check_replacement(&replacement, platform)?;

        Ok(Self {
            rules,
            platform,
            replacement,
        })
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Sanitize one file name or path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SanitizationFailed`] if `validate_after_sanitize` is set
    /// and the result still fails validation (for example when every
    /// character was removed).
    pub fn sanitize(&self, input: &str) -> Result<String> {
        let sanitized = if self.rules.is_filename() {
            self.sanitize_name(input, self.rules.segment_max_length())
        } else if self.rules.normalize() {
            // A second pass so components repaired into `.`/`..` are resolved too.
            let once = self.sanitize_path(&normalize_path(input, self.platform));
            self.sanitize_path(&normalize_path(&once, self.platform))
        } else {
            self.sanitize_path(input)
        };

        debug!(
            input = %input,
            sanitized = %sanitized,
            platform = %self.rules.platform(),
            "Sanitized"
        );

        if self.rules.validate_after_sanitize()
            && let Err(violations) = validate(&sanitized, &self.rules)
        {
            debug!(
                input = %input,
                sanitized = %sanitized,
                violations = %violations,
                "Sanitized value failed validation"
            );
            return Err(Error::SanitizationFailed {
                value: input.to_string(),
                sanitized,
                violations,
            });
        }

        Ok(sanitized)
    }

    fn should_replace(&self, c: char) -> bool {
        PlatformRules::is_control(c)
            || self.platform.is_invalid_char(c)
            || (self.rules.is_filename() && self.platform.is_separator(c))
    }

    /// Sanitize a single name to at most `limit` bytes.
    fn sanitize_name(&self, name: &str, limit: usize) -> String {
        let is_filename = self.rules.is_filename();

        let mut out = String::with_capacity(name.len());
        for c in name.chars() {
            if self.should_replace(c) {
                out.push_str(&self.replacement);
            } else {
                out.push(c);
            }
        }

        truncate_bytes(&mut out, limit);

        if self.platform.has_illegal_trailing(&out, is_filename) {
            let keep = out.trim_end_matches(['.', ' ']).len();
            out.truncate(keep);
        }

        if self.platform.is_reserved(&out, is_filename) {
            out = rename_reserved(&out, limit);
        }

        out
    }

    fn sanitize_path(&self, path: &str) -> String {
        let layout = Layout::parse(path, self.platform);
        let segment_max = self.rules.segment_max_length();

        let components: Vec<Component> = layout
            .pieces
            .iter()
            .filter(|piece| !piece.text.is_empty())
            .map(|piece| Component {
                separator: piece.separator,
                name: self.sanitize_name(piece.text, segment_max),
            })
            .filter(|component| !component.name.is_empty())
            .collect();

        let budget = self.rules.max_length();
        match layout.prefix {
            Prefix::Unc => {
                let (unc, kept) = self.assemble(layout.prefix_text, &components, budget);
                if kept >= 2 {
                    return unc;
                }
                // Server or share missing: fall back to a rooted path.
                self.assemble(&layout.prefix_text[..1], &components, budget).0
            },
            Prefix::Drive(Drive::Relative) => {
                let mut prefix = layout.prefix_text.to_string();
                prefix.push(self.platform.preferred_separator);
                self.assemble(&prefix, &components, budget).0
            },
            _ => self.assemble(layout.prefix_text, &components, budget).0,
        }
    }

    /// Join prefix and components within `budget` bytes.
    ///
    /// Returns the path and the number of components kept. The first
    /// component that does not fit is cut and sanitized again at its
    /// remaining size; everything after it is dropped.
    fn assemble(&self, prefix: &str, components: &[Component], budget: usize) -> (String, usize) {
        let mut out = String::with_capacity(budget.min(prefix.len() + components.len() * 16));
        if prefix.len() <= budget {
            out.push_str(prefix);
        }

        let mut kept = 0;
        for component in components {
            let separator = if kept == 0 { None } else { component.separator };
            let sep_len = separator.map_or(0, char::len_utf8);
            let remaining = budget - out.len();

            if sep_len + component.name.len() <= remaining {
                out.extend(separator);
                out.push_str(&component.name);
                kept += 1;
                continue;
            }

            if remaining > sep_len {
                let limit = remaining - sep_len;
                let mut cut = component.name.clone();
                truncate_bytes(&mut cut, limit);
                let cut = self.sanitize_name(&cut, limit);
                if !cut.is_empty() {
                    out.extend(separator);
                    out.push_str(&cut);
                    kept += 1;
                }
            }
            break;
        }

        (out, kept)
    }
}

/// Reject replacement text that would itself introduce violations.
fn check_replacement(replacement: &str, platform: &PlatformRules) -> Result<()> {
    for c in replacement.chars() {
        let reason = if PlatformRules::is_control(c) {
            "contains a control character"
        } else if platform.is_separator(c) {
            "contains a path separator"
        } else if platform.is_invalid_char(c) {
            "contains a character that is invalid on the target platform"
        } else {
            continue;
        };
        return Err(Error::invalid_replacement(replacement, reason));
    }
    Ok(())
}

/// Append the reserved-name suffix to the stem, keeping within `limit` bytes.
fn rename_reserved(name: &str, limit: usize) -> String {
    let stem_len = if is_dot_name(name) {
        name.len()
    } else {
        device_stem(name).len()
    };

    let mut renamed = String::with_capacity(name.len() + 1);
    renamed.push_str(&name[..stem_len]);
    renamed.push(RESERVED_NAME_SUFFIX);
    renamed.push_str(&name[stem_len..]);

    if renamed.len() > limit {
        truncate_bytes(&mut renamed, limit.saturating_sub(1));
        renamed.push(RESERVED_NAME_SUFFIX);
    }
    renamed
}

/// Truncate to at most `max` bytes without splitting a character.
fn truncate_bytes(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
