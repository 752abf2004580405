//! Lexical path normalization.
//!
//! Purely textual: no filesystem access and no symlink resolution.

use crate::rules::{Layout, PlatformRules};

/// Normalize a path for a platform.
///
/// - separators become the platform's preferred separator
/// - repeated separators collapse
/// - `.` components are removed
/// - `..` removes the preceding component; at a root it is dropped
/// - trailing separators are removed
///
/// A relative path that normalizes to nothing becomes `.`.
///
/// # Examples
///
/// ```
/// use pathvalidate::Platform;
/// use pathvalidate::rules::PlatformRules;
/// use pathvalidate::sanitizer::normalize_path;
///
/// let windows = PlatformRules::of(Platform::Windows);
/// assert_eq!(normalize_path("C:/a/./b/../c/", windows), "C:\\a\\c");
///
/// let linux = PlatformRules::of(Platform::Linux);
/// assert_eq!(normalize_path("a//b/../../..", linux), "..");
/// ```
#[must_use]
pub fn normalize_path(path: &str, rules: &PlatformRules) -> String {
    if path.is_empty() {
        return String::new();
    }

    let sep = rules.preferred_separator;
    let converted: String = path
        .chars()
        .map(|c| if rules.is_separator(c) { sep } else { c })
        .collect();

    let layout = Layout::parse(&converted, rules);
    let rooted = layout.prefix.is_rooted();

    let mut stack: Vec<&str> = Vec::with_capacity(layout.pieces.len());
    for piece in &layout.pieces {
        match piece.text {
            "" | "." => {},
            ".." => {
                if stack.last().is_some_and(|last| *last != "..") {
                    stack.pop();
                } else if !rooted {
                    stack.push("..");
                }
            },
            name => stack.push(name),
        }
    }

    let mut out = String::with_capacity(converted.len());
    out.push_str(layout.prefix_text);
    for (i, name) in stack.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.push_str(name);
    }

    if out.is_empty() {
        out.push('.');
    }
    out
}
