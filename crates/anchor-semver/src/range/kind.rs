//! Range kinds

use std::fmt;

/// Which components of a range's basis version are pinned
///
/// Variants are declared from narrowest to widest, so `Ord` reads as
/// leniency: `Exact < SameMinor < SameMajor < AnythingGreater`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeKind {
    /// Only the basis version (=)
    Exact,
    /// Major and minor pinned (~)
    SameMinor,
    /// Major pinned (^)
    SameMajor,
    /// No upper bound (+)
    AnythingGreater,
}

impl RangeKind {
    /// Parse a kind from its prefix character
    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            '=' => Some(RangeKind::Exact),
            '~' => Some(RangeKind::SameMinor),
            '^' => Some(RangeKind::SameMajor),
            '+' => Some(RangeKind::AnythingGreater),
            _ => None,
        }
    }

    /// Get the prefix character of the kind
    pub fn prefix(&self) -> &'static str {
        match self {
            RangeKind::Exact => "=",
            RangeKind::SameMinor => "~",
            RangeKind::SameMajor => "^",
            RangeKind::AnythingGreater => "+",
        }
    }

    /// Whether ranges of this kind have a finite exclusive upper bound
    pub fn is_bounded(&self) -> bool {
        !matches!(self, RangeKind::AnythingGreater)
    }

    /// Get all supported prefixes
    pub fn supported_prefixes() -> &'static [&'static str] {
        &["=", "~", "^", "+"]
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
