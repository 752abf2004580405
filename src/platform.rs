//! Target platform resolution.
//!
//! A [`Platform`] selects which legality rules apply. `auto` is accepted by
//! [`Platform::resolve`] and replaced by the running platform right there;
//! it is never a stored value, so the rest of the engine never inspects the
//! environment.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// Target filesystem convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Generic POSIX-compliant system.
    Posix,
    Linux,
    MacOs,
    Windows,
    /// Strictest combination of every other platform's rules.
    Universal,
}

impl Platform {
    /// Resolve a platform specifier (case-insensitive).
    ///
    /// Accepted values: `auto`, `universal`, `posix`, `linux`, `macos`,
    /// `darwin`, `windows`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPlatform`] naming the offending value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvalidate::Platform;
    ///
    /// assert_eq!(Platform::resolve("Windows").unwrap(), Platform::Windows);
    /// assert_eq!(Platform::resolve("darwin").unwrap(), Platform::MacOs);
    /// assert!(Platform::resolve("beos").is_err());
    /// ```
    pub fn resolve(specifier: &str) -> Result<Self> {
        let platform = match specifier.trim().to_ascii_lowercase().as_str() {
            "auto" => Self::detect(),
            "universal" => Self::Universal,
            "posix" => Self::Posix,
            "linux" => Self::Linux,
            "macos" | "darwin" => Self::MacOs,
            "windows" => Self::Windows,
            _ => return Err(Error::UnknownPlatform(specifier.to_string())),
        };

        debug!(specifier = %specifier, platform = %platform, "Resolved platform");
        Ok(platform)
    }

    /// Platform of the running process.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS` value to a platform.
    ///
    /// Unrecognized operating systems fall back to [`Platform::Universal`].
    #[must_use]
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "linux" | "android" => Self::Linux,
            "macos" | "ios" => Self::MacOs,
            "windows" => Self::Windows,
            "freebsd" | "netbsd" | "openbsd" | "dragonfly" | "solaris" | "illumos" | "aix"
            | "haiku" => Self::Posix,
            _ => Self::Universal,
        }
    }

    /// Canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Posix => "POSIX",
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Windows => "Windows",
            Self::Universal => "universal",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
