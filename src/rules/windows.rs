//! Windows-specific naming rules.
//!
//! - Reserved device names (CON, PRN, AUX, NUL, COM1-9, LPT1-9)
//! - Drive-letter prefixes (`C:\`)
//! - UNC prefixes (`\\server\share`)
//!
//! Universal rules include all of these, except that universal paths never
//! accept a drive or UNC prefix.

/// Reserved Windows device names that are reserved even with an extension.
///
/// Windows treats these as device names regardless of extension or case:
/// - `CON`, `PRN`, `AUX`, `NUL`
/// - `COM1` through `COM9`
/// - `LPT1` through `LPT9`
pub const WINDOWS_RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters Windows forbids in a file name, separators excluded.
pub const WINDOWS_INVALID_CHARS: &[char] = &['"', '*', ':', '<', '>', '?', '|'];

/// The part of a name Windows compares against [`WINDOWS_RESERVED_NAMES`].
///
/// "CON.txt" -> "CON", "NUL" -> "NUL", "aux.tar.gz" -> "aux"
#[must_use]
pub fn device_stem(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Returns true if the name is a reserved device name (case-insensitive).
///
/// # Examples
///
/// ```
/// use pathvalidate::rules::windows::is_reserved_device_name;
///
/// assert!(is_reserved_device_name("con.txt"));
/// assert!(is_reserved_device_name("LPT9"));
/// assert!(!is_reserved_device_name("CONSOLE.txt"));
/// ```
#[must_use]
pub fn is_reserved_device_name(name: &str) -> bool {
    let stem = device_stem(name);
    WINDOWS_RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
}

/// A leading drive letter and what follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    /// `C:` followed by a separator.
    Rooted,
    /// `C:` and nothing else.
    Bare,
    /// `C:` followed by a name (`C:foo`), which is not accepted.
    Relative,
}

/// Detect a drive-letter prefix.
///
/// Only an ASCII letter followed by `:` counts; anything else is left to the
/// character rules.
#[must_use]
pub fn parse_drive(path: &str, is_separator: impl Fn(char) -> bool) -> Option<Drive> {
    let mut chars = path.chars();
    let letter = chars.next()?;
    if !letter.is_ascii_alphabetic() || chars.next()? != ':' {
        return None;
    }

    Some(match chars.next() {
        None => Drive::Bare,
        Some(c) if is_separator(c) => Drive::Rooted,
        Some(_) => Drive::Relative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sep(c: char) -> bool {
        c == '/' || c == '\\'
    }

    // =========================================================================
    // RESERVED DEVICE NAME TESTS
    // =========================================================================

    #[test]
    fn test_reserved_names_comprehensive() {
        for name in &["CON", "PRN", "AUX", "NUL"] {
            assert!(is_reserved_device_name(name), "Should reject {name}");
        }

        for i in 1..=9 {
            let com = format!("COM{i}");
            let lpt = format!("LPT{i}");
            assert!(is_reserved_device_name(&com), "Should reject {com}");
            assert!(is_reserved_device_name(&lpt), "Should reject {lpt}");
        }
    }

    #[test]
    fn test_reserved_names_case_insensitive() {
        assert!(is_reserved_device_name("con"));
        assert!(is_reserved_device_name("CoN"));
        assert!(is_reserved_device_name("cON"));
        assert!(is_reserved_device_name("nUl"));
    }

    #[test]
    fn test_reserved_with_extensions() {
        assert!(is_reserved_device_name("CON.txt"));
        assert!(is_reserved_device_name("NUL.exe"));
        assert!(is_reserved_device_name("COM1.log"));
        assert!(is_reserved_device_name("aux.anything.here"));
    }

    #[test]
    fn test_safe_names_similar_to_reserved() {
        assert!(!is_reserved_device_name("CONN.txt")); // Extra N
        assert!(!is_reserved_device_name("PRNT.txt")); // Extra T
        assert!(!is_reserved_device_name("AUXILLARY.txt"));
        assert!(!is_reserved_device_name("NULLIFY.txt"));
        assert!(!is_reserved_device_name("COM10.txt")); // COM10+ not reserved
        assert!(!is_reserved_device_name("COM0.txt"));
        assert!(!is_reserved_device_name("LPT0.txt"));
        assert!(!is_reserved_device_name("CON_.txt"));
        assert!(!is_reserved_device_name(""));
    }

    // =========================================================================
    // DRIVE LETTER TESTS
    // =========================================================================

    #[test]
    fn test_parse_drive() {
        assert_eq!(parse_drive("C:\\Users", is_sep), Some(Drive::Rooted));
        assert_eq!(parse_drive("d:/data", is_sep), Some(Drive::Rooted));
        assert_eq!(parse_drive("C:", is_sep), Some(Drive::Bare));
        assert_eq!(parse_drive("C:foo", is_sep), Some(Drive::Relative));
    }

    #[test]
    fn test_parse_drive_rejects_non_drives() {
        assert_eq!(parse_drive("1:\\foo", is_sep), None);
        assert_eq!(parse_drive("ab:\\", is_sep), None);
        assert_eq!(parse_drive("C", is_sep), None);
        assert_eq!(parse_drive("", is_sep), None);
        assert_eq!(parse_drive("é:\\", is_sep), None);
    }
}
