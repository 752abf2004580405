//! Per-platform legality rules and the resolved [`RuleSet`].
//!
//! Rules are plain data: every [`Platform`] maps to one static
//! [`PlatformRules`] record, which both the validator and the sanitizer
//! consult.
//!
//! | Platform  | Separators | Extra invalid chars | Reserved device names | Trailing `.`/space | Drive/UNC | Max path |
//! |-----------|------------|---------------------|-----------------------|--------------------|-----------|----------|
//! | POSIX     | `/`        | -                   | no                    | allowed            | no        | 1024     |
//! | Linux     | `/`        | -                   | no                    | allowed            | no        | 4096     |
//! | macOS     | `/`        | `:`                 | no                    | allowed            | no        | 1024     |
//! | Windows   | `\` `/`    | `"*:<>?\|`          | yes                   | forbidden          | yes       | 260      |
//! | universal | `\` `/`    | `"*:<>?\|`          | yes                   | forbidden          | no        | 260      |
//!
//! Control characters (U+0000-U+001F, U+007F) are invalid everywhere, and
//! every platform limits a single name to 255 bytes.

mod path;
pub mod windows;

pub use path::{Layout, Piece, Prefix};

use tracing::debug;

use crate::constants::{
    DEFAULT_MIN_LEN, LINUX_MAX_PATH_LEN, MACOS_MAX_PATH_LEN, MAX_FILENAME_LEN, POSIX_MAX_PATH_LEN,
    WINDOWS_MAX_PATH_LEN,
};
use crate::error::{Error, Result};
use crate::platform::Platform;

use windows::{WINDOWS_INVALID_CHARS, is_reserved_device_name};

/// Static legality rules of one platform.
#[derive(Debug, PartialEq, Eq)]
pub struct PlatformRules {
    pub platform: Platform,
    /// Characters that separate path components.
    pub separators: &'static [char],
    /// Separator written by normalization.
    pub preferred_separator: char,
    /// Printable characters forbidden in names, separators excluded.
    pub invalid_chars: &'static [char],
    /// Whether Windows device names (CON, NUL, ...) are reserved.
    pub reserved_device_names: bool,
    /// Whether names may not end with `.` or a space.
    pub forbid_trailing_dot_space: bool,
    /// Whether drive letters and UNC prefixes are recognized.
    pub drive_and_unc: bool,
    /// Default maximum path length in bytes.
    pub max_path_len: usize,
}

const POSIX_RULES: PlatformRules = PlatformRules {
    platform: Platform::Posix,
    separators: &['/'],
    preferred_separator: '/',
    invalid_chars: &[],
    reserved_device_names: false,
    forbid_trailing_dot_space: false,
    drive_and_unc: false,
    max_path_len: POSIX_MAX_PATH_LEN,
};

const LINUX_RULES: PlatformRules = PlatformRules {
    platform: Platform::Linux,
    max_path_len: LINUX_MAX_PATH_LEN,
    ..POSIX_RULES
};

const MACOS_RULES: PlatformRules = PlatformRules {
    platform: Platform::MacOs,
    invalid_chars: &[':'],
    max_path_len: MACOS_MAX_PATH_LEN,
    ..POSIX_RULES
};

const WINDOWS_RULES: PlatformRules = PlatformRules {
    platform: Platform::Windows,
    separators: &['\\', '/'],
    preferred_separator: '\\',
    invalid_chars: WINDOWS_INVALID_CHARS,
    reserved_device_names: true,
    forbid_trailing_dot_space: true,
    drive_and_unc: true,
    max_path_len: WINDOWS_MAX_PATH_LEN,
};

const UNIVERSAL_RULES: PlatformRules = PlatformRules {
    platform: Platform::Universal,
    preferred_separator: '/',
    drive_and_unc: false,
    ..WINDOWS_RULES
};

impl PlatformRules {
    /// Rules for a platform.
    #[must_use]
    pub const fn of(platform: Platform) -> &'static Self {
        match platform {
            Platform::Posix => &POSIX_RULES,
            Platform::Linux => &LINUX_RULES,
            Platform::MacOs => &MACOS_RULES,
            Platform::Windows => &WINDOWS_RULES,
            Platform::Universal => &UNIVERSAL_RULES,
        }
    }

    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Null byte, C0 control characters and DEL.
    #[must_use]
    pub fn is_control(c: char) -> bool {
        c.is_ascii_control()
    }

    /// Printable character forbidden on this platform.
    #[must_use]
    pub fn is_invalid_char(&self, c: char) -> bool {
        self.invalid_chars.contains(&c)
    }

    /// Reserved name check.
    ///
    /// `.` and `..` are reserved as file names everywhere but are ordinary
    /// path components; device names are reserved on Windows and universal.
    #[must_use]
    pub fn is_reserved(&self, name: &str, is_filename: bool) -> bool {
        if is_dot_name(name) {
            return is_filename;
        }
        self.reserved_device_names && is_reserved_device_name(name)
    }

    /// Returns true if the name ends with a character this platform strips.
    #[must_use]
    pub fn has_illegal_trailing(&self, name: &str, is_filename: bool) -> bool {
        if !self.forbid_trailing_dot_space || (!is_filename && is_dot_name(name)) {
            return false;
        }
        name.ends_with(['.', ' '])
    }
}

/// `.` or `..`.
#[must_use]
pub fn is_dot_name(name: &str) -> bool {
    name == "." || name == ".."
}

/// Immutable rules for one validation or sanitization.
///
/// Built from a [`Platform`] plus caller overrides:
///
/// ```
/// use pathvalidate::{Platform, RuleSet};
///
/// let rules = RuleSet::new(Platform::Windows)
///     .with_filename(true)
///     .with_max_length(Some(64));
///
/// assert_eq!(rules.max_length(), 64);
/// assert!(rules.check_reserved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    platform: Platform,
    max_length: Option<usize>,
    min_length: usize,
    check_reserved: bool,
    is_filename: bool,
    normalize: bool,
    validate_after_sanitize: bool,
}

impl RuleSet {
    /// Default rules for a platform: path mode, reserved names checked,
    /// platform length limit, minimum length 1.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            max_length: None,
            min_length: DEFAULT_MIN_LEN,
            check_reserved: true,
            is_filename: false,
            normalize: false,
            validate_after_sanitize: false,
        }
    }

    /// Maximum length in bytes; `None` uses the platform default.
    #[must_use]
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn with_check_reserved(mut self, check_reserved: bool) -> Self {
        self.check_reserved = check_reserved;
        self
    }

    /// Treat inputs as single file names instead of paths.
    #[must_use]
    pub fn with_filename(mut self, is_filename: bool) -> Self {
        self.is_filename = is_filename;
        self
    }

    /// Normalize paths before sanitizing. Ignored in filename mode.
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    #[must_use]
    pub fn with_validate_after_sanitize(mut self, validate: bool) -> Self {
        self.validate_after_sanitize = validate;
        self
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn platform_rules(&self) -> &'static PlatformRules {
        PlatformRules::of(self.platform)
    }

    /// Effective maximum length in bytes.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length.unwrap_or_else(|| {
            if self.is_filename {
                MAX_FILENAME_LEN
            } else {
                self.platform_rules().max_path_len
            }
        })
    }

    /// Maximum length in bytes of one path component.
    #[must_use]
    pub fn segment_max_length(&self) -> usize {
        self.max_length().min(MAX_FILENAME_LEN)
    }

    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn check_reserved(&self) -> bool {
        self.check_reserved
    }

    #[must_use]
    pub fn is_filename(&self) -> bool {
        self.is_filename
    }

    /// Whether normalization applies (never in filename mode).
    #[must_use]
    pub fn normalize(&self) -> bool {
        self.normalize && !self.is_filename
    }

    #[must_use]
    pub fn validate_after_sanitize(&self) -> bool {
        self.validate_after_sanitize
    }

    /// Check that at least one legal value exists under these rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsatisfiable`] if the maximum length is 0 or smaller
    /// than the minimum length.
    pub fn check_satisfiable(&self) -> Result<()> {
        let max = self.max_length();
        if max == 0 {
            return Err(Error::unsatisfiable("maximum length is 0"));
        }
        if max < self.min_length {
            return Err(Error::unsatisfiable(format!(
                "maximum length {max} is smaller than minimum length {}",
                self.min_length
            )));
        }

        debug!(
            platform = %self.platform,
            max_length = max,
            min_length = self.min_length,
            "Rule set is satisfiable"
        );
        Ok(())
    }
}
