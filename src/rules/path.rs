//! Splitting a path into its prefix and components.
//!
//! Both the validator and the sanitizer read paths through [`Layout::parse`],
//! so they always agree on what a segment is.

use super::PlatformRules;
use super::windows::{Drive, parse_drive};

/// Structural prefix of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// Relative path.
    None,
    /// A single leading separator.
    Root,
    /// A drive letter (Windows only).
    Drive(Drive),
    /// Two leading separators (Windows only); server and share follow.
    Unc,
}

impl Prefix {
    /// Returns true if `..` cannot climb above this prefix.
    #[must_use]
    pub fn is_rooted(self) -> bool {
        matches!(self, Self::Root | Self::Drive(Drive::Rooted) | Self::Unc)
    }
}

/// One component of a path, between separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'a> {
    pub text: &'a str,
    /// Byte offset in the full path.
    pub start: usize,
    /// Separator immediately before this piece, if it is not the first.
    pub separator: Option<char>,
}

/// A path split into prefix and pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'a> {
    pub prefix: Prefix,
    /// The prefix text as it appears in the path.
    pub prefix_text: &'a str,
    /// Components after the prefix. Empty pieces are kept so callers can
    /// report or drop them; a path with nothing after its prefix has none.
    pub pieces: Vec<Piece<'a>>,
}

impl<'a> Layout<'a> {
    /// Parse a path under the given platform rules.
    #[must_use]
    pub fn parse(path: &'a str, rules: &PlatformRules) -> Self {
        let (prefix, prefix_len) = detect_prefix(path, rules);
        let rest = &path[prefix_len..];

        let mut pieces = Vec::new();
        if !rest.is_empty() {
            let mut start = 0;
            let mut separator = None;
            for (i, c) in rest.char_indices() {
                if rules.is_separator(c) {
                    pieces.push(Piece {
                        text: &rest[start..i],
                        start: prefix_len + start,
                        separator,
                    });
                    separator = Some(c);
                    start = i + c.len_utf8();
                }
            }
            pieces.push(Piece {
                text: &rest[start..],
                start: prefix_len + start,
                separator,
            });
        }

        Self {
            prefix,
            prefix_text: &path[..prefix_len],
            pieces,
        }
    }

    /// Index of the last piece when it is the empty tail of a trailing separator.
    #[must_use]
    pub fn trailing_empty(&self) -> Option<usize> {
        match self.pieces.last() {
            Some(last) if last.text.is_empty() && self.pieces.len() > 1 => {
                Some(self.pieces.len() - 1)
            },
            _ => None,
        }
    }
}

fn detect_prefix(path: &str, rules: &PlatformRules) -> (Prefix, usize) {
    let mut chars = path.chars();
    let first = chars.next();
    let second = chars.next();

    if rules.drive_and_unc {
        if let (Some(a), Some(b)) = (first, second)
            && rules.is_separator(a)
            && rules.is_separator(b)
        {
            return (Prefix::Unc, 2);
        }

        if let Some(drive) = parse_drive(path, |c| rules.is_separator(c)) {
            let len = if drive == Drive::Rooted { 3 } else { 2 };
            return (Prefix::Drive(drive), len);
        }
    }

    match first {
        Some(c) if rules.is_separator(c) => (Prefix::Root, c.len_utf8()),
        _ => (Prefix::None, 0),
    }
}
