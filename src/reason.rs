//! Violation reasons and the values that carry them.
//!
//! Every [`Reason`] has a stable code (`PV1001`, ...), a stable name, and a
//! human description. Codes are never reused for a different meaning, so they
//! are safe to persist in logs and reports.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Closed set of violation reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reason {
    /// The value is an empty string.
    NullName,
    /// The value is a name reserved by the platform.
    ReservedName,
    /// The value contains a character the platform forbids.
    InvalidCharacter,
    /// The value exceeds the maximum byte length.
    InvalidLength,
    /// The value contains a null byte or another control character.
    ControlCharacter,
    /// The value is shorter than the minimum byte length.
    TooShort,
    /// The value ends with a period or a space.
    InvalidTrailingCharacter,
    /// A filename contains a path separator.
    SeparatorInFilename,
    /// A path contains an empty component between two separators.
    EmptySegment,
    /// A filename is an absolute path.
    FoundAbsPath,
    /// A drive letter or UNC prefix is malformed.
    MalformedAbsPath,
    /// A sanitized value still fails validation.
    InvalidAfterSanitize,
}

impl Reason {
    /// Every reason, ascending by code.
    pub const ALL: &'static [Reason] = &[
        Reason::NullName,
        Reason::ReservedName,
        Reason::InvalidCharacter,
        Reason::InvalidLength,
        Reason::ControlCharacter,
        Reason::TooShort,
        Reason::InvalidTrailingCharacter,
        Reason::SeparatorInFilename,
        Reason::EmptySegment,
        Reason::FoundAbsPath,
        Reason::MalformedAbsPath,
        Reason::InvalidAfterSanitize,
    ];

    /// Stable code, e.g. `PV1100`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NullName => "PV1001",
            Self::ReservedName => "PV1002",
            Self::InvalidCharacter => "PV1100",
            Self::InvalidLength => "PV1101",
            Self::ControlCharacter => "PV1102",
            Self::TooShort => "PV1103",
            Self::InvalidTrailingCharacter => "PV1104",
            Self::SeparatorInFilename => "PV1105",
            Self::EmptySegment => "PV1106",
            Self::FoundAbsPath => "PV1200",
            Self::MalformedAbsPath => "PV1201",
            Self::InvalidAfterSanitize => "PV2000",
        }
    }

    /// Stable name, e.g. `INVALID_CHARACTER`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NullName => "NULL_NAME",
            Self::ReservedName => "RESERVED_NAME",
            Self::InvalidCharacter => "INVALID_CHARACTER",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::ControlCharacter => "CONTROL_CHARACTER",
            Self::TooShort => "TOO_SHORT",
            Self::InvalidTrailingCharacter => "INVALID_TRAILING_CHARACTER",
            Self::SeparatorInFilename => "SEPARATOR_IN_FILENAME",
            Self::EmptySegment => "EMPTY_SEGMENT",
            Self::FoundAbsPath => "FOUND_ABS_PATH",
            Self::MalformedAbsPath => "MALFORMED_ABS_PATH",
            Self::InvalidAfterSanitize => "INVALID_AFTER_SANITIZE",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NullName => "the value must not be an empty string",
            Self::ReservedName => "found a reserved name by a platform",
            Self::InvalidCharacter => "invalid characters found",
            Self::InvalidLength => "found an invalid string length",
            Self::ControlCharacter => "found a null byte or control character",
            Self::TooShort => "the value is shorter than the minimum length",
            Self::InvalidTrailingCharacter => "found a trailing period or space",
            Self::SeparatorInFilename => "found a path separator in a filename",
            Self::EmptySegment => "found an empty path component",
            Self::FoundAbsPath => "found an absolute path where must be a relative path",
            Self::MalformedAbsPath => "found a malformed absolute path",
            Self::InvalidAfterSanitize => "found invalid value after sanitizing",
        }
    }

    /// Look up a reason by code (case-insensitive, surrounding whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReasonNotFound`] for unknown codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalidate::Reason;
    ///
    /// assert_eq!(Reason::lookup("PV1002").unwrap(), Reason::ReservedName);
    /// assert!(Reason::lookup("INVALID").is_err());
    /// ```
    pub fn lookup(code: &str) -> Result<Self> {
        let wanted = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|reason| reason.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::ReasonNotFound(code.to_string()))
    }

    /// Every reason, ascending by code.
    pub fn list_all() -> impl Iterator<Item = Reason> {
        Self::ALL.iter().copied()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.description())
    }
}

impl Serialize for Reason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// A single detected legality failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub reason: Reason,
    /// Offending character or substring, when one can be named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
    /// Byte offset of the fragment in the validated input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl Violation {
    /// Violation that concerns the value as a whole.
    #[must_use]
    pub fn new(reason: Reason) -> Self {
        Self {
            reason,
            fragment: None,
            position: None,
        }
    }

    /// Violation located at `position` with an offending fragment.
    #[must_use]
    pub fn at(reason: Reason, fragment: impl Into<String>, position: usize) -> Self {
        Self {
            reason,
            fragment: Some(fragment.into()),
            position: Some(position),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)?;
        match (&self.fragment, self.position) {
            (Some(fragment), Some(pos)) => write!(f, ": {fragment:?} at byte {pos}"),
            (Some(fragment), None) => write!(f, ": {fragment:?}"),
            (None, Some(pos)) => write!(f, " at byte {pos}"),
            (None, None) => Ok(()),
        }
    }
}

/// Non-empty, ordered list of violations returned by a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Wrap a list, returning `None` when it is empty.
    #[must_use]
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self(violations))
        }
    }

    /// The first violation found.
    #[must_use]
    pub fn first(&self) -> &Violation {
        &self.0[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: a `Violations` list is non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Returns true if any violation has the given reason.
    #[must_use]
    pub fn contains(&self, reason: Reason) -> bool {
        self.0.iter().any(|v| v.reason == reason)
    }

    /// Reasons in report order.
    #[must_use]
    pub fn reasons(&self) -> Vec<Reason> {
        self.0.iter().map(|v| v.reason).collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_ascending() {
        let codes: Vec<&str> = Reason::list_all().map(Reason::code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(Reason::lookup("PV1001").unwrap(), Reason::NullName);
        assert_eq!(Reason::lookup("pv1100").unwrap(), Reason::InvalidCharacter);
        assert_eq!(Reason::lookup(" PV2000 ").unwrap(), Reason::InvalidAfterSanitize);
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert_eq!(
            Reason::lookup("INVALID"),
            Err(Error::ReasonNotFound("INVALID".to_string()))
        );
        assert!(Reason::lookup("").is_err());
    }

    #[test]
    fn test_lookup_roundtrips_every_entry() {
        for reason in Reason::list_all() {
            assert_eq!(Reason::lookup(reason.code()).unwrap(), reason);
        }
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::at(Reason::InvalidCharacter, ":", 2);
        assert_eq!(v.to_string(), "[PV1100] invalid characters found: \":\" at byte 2");

        let v = Violation::new(Reason::NullName);
        assert_eq!(v.to_string(), "[PV1001] the value must not be an empty string");
    }

    #[test]
    fn test_violations_never_empty() {
        assert!(Violations::from_vec(Vec::new()).is_none());

        let list = Violations::from_vec(vec![
            Violation::new(Reason::TooShort),
            Violation::at(Reason::ControlCharacter, "\0", 0),
        ])
        .unwrap();
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.first().reason, Reason::TooShort);
        assert!(list.contains(Reason::ControlCharacter));
        assert!(!list.contains(Reason::ReservedName));
    }

    #[test]
    fn test_violation_serializes_code() {
        let v = Violation::at(Reason::ReservedName, "CON", 0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"reason":"PV1002","fragment":"CON","position":0}"#);
    }
}
