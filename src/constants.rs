//! Shared constants.

/// Maximum byte length of a single file name on every supported platform.
pub const MAX_FILENAME_LEN: usize = 255;

/// Default maximum path length in bytes on Linux (`PATH_MAX`).
pub const LINUX_MAX_PATH_LEN: usize = 4096;

/// Default maximum path length in bytes on generic POSIX systems.
pub const POSIX_MAX_PATH_LEN: usize = 1024;

/// Default maximum path length in bytes on macOS.
pub const MACOS_MAX_PATH_LEN: usize = 1024;

/// Default maximum path length on Windows (`MAX_PATH`).
pub const WINDOWS_MAX_PATH_LEN: usize = 260;

/// Default minimum length in bytes.
pub const DEFAULT_MIN_LEN: usize = 1;

/// Suffix appended to the stem of a sanitized reserved name.
pub const RESERVED_NAME_SUFFIX: char = '_';
