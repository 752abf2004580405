//! Error types for typed error handling.
//!
//! Invalid input is not an error: [`validate`](crate::validate) reports it as
//! [`Violations`]. The variants here cover malformed configuration, lookups
//! of unknown reason codes, and sanitizer output that failed re-validation.

use crate::reason::Violations;

/// Result type for pathvalidate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors with structured context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Platform specifier is not one of the known names.
    #[error(
        "unknown platform specifier '{0}' (expected auto, universal, posix, linux, macos, darwin or windows)"
    )]
    UnknownPlatform(String),

    /// Rule set admits no legal value.
    #[error("unsatisfiable rule set: {0}")]
    Unsatisfiable(String),

    /// Replacement text would itself introduce violations.
    #[error("invalid replacement text {text:?}: {reason}")]
    InvalidReplacement { text: String, reason: String },

    /// Sanitized value still fails validation.
    #[error("[PV2000] found invalid value after sanitizing {value:?} -> {sanitized:?}: {violations}")]
    SanitizationFailed {
        value: String,
        sanitized: String,
        violations: Violations,
    },

    /// Reason code lookup failed.
    #[error("Error code {0} is not found.")]
    ReasonNotFound(String),

    /// Configuration value out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for errors caused by caller-supplied configuration.
    ///
    /// These must be fixed by the caller before retrying.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownPlatform(_)
                | Self::Unsatisfiable(_)
                | Self::InvalidReplacement { .. }
                | Self::Config(_)
        )
    }

    /// Create an unsatisfiable rule set error.
    pub fn unsatisfiable(reason: impl Into<String>) -> Self {
        Self::Unsatisfiable(reason.into())
    }

    /// Create an invalid replacement error.
    pub fn invalid_replacement(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidReplacement {
            text: text.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_classified() {
        assert!(Error::UnknownPlatform("beos".into()).is_configuration_error());
        assert!(Error::unsatisfiable("max length is 0").is_configuration_error());
        assert!(Error::invalid_replacement("/", "separator").is_configuration_error());
        assert!(!Error::ReasonNotFound("PV9999".into()).is_configuration_error());
    }

    #[test]
    fn test_display_names_offending_value() {
        let err = Error::UnknownPlatform("beos".into());
        assert!(err.to_string().contains("'beos'"));

        let err = Error::ReasonNotFound("INVALID".into());
        assert_eq!(err.to_string(), "Error code INVALID is not found.");
    }
}
