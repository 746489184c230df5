//! Prerelease and build metadata identifiers

use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();
    static ref NUMERIC_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// A malformed dot-separated identifier sequence
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid identifier at offset {offset}")]
pub struct InvalidIdentifier {
    offset: usize,
}

impl InvalidIdentifier {
    /// Byte offset of the offending identifier within the parsed segment
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// A single prerelease identifier
///
/// Variant order matters: numeric identifiers always have lower precedence
/// than alphanumeric ones at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    Alphanumeric(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alphanumeric(s) => f.write_str(s),
        }
    }
}

/// Split `segment` on dots, handing each identifier and its offset to `f`
fn for_each_identifier<F>(segment: &str, mut f: F) -> Result<(), InvalidIdentifier>
where
    F: FnMut(&str, usize) -> Result<(), InvalidIdentifier>,
{
    let mut offset = 0;
    for part in segment.split('.') {
        if !IDENTIFIER_RE.is_match(part) {
            return Err(InvalidIdentifier { offset });
        }
        f(part, offset)?;
        offset += part.len() + 1;
    }
    Ok(())
}

/// The `-` suffix of a version
///
/// An empty prerelease outranks every non-empty one, so a release version
/// sorts above all of its prereleases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prerelease {
    identifiers: Vec<Identifier>,
}

impl Prerelease {
    pub const EMPTY: Prerelease = Prerelease {
        identifiers: Vec::new(),
    };

    /// Parse a dot-separated prerelease, without the leading `-`
    pub fn parse(segment: &str) -> Result<Self, InvalidIdentifier> {
        let mut identifiers = Vec::new();
        for_each_identifier(segment, |part, offset| {
            if NUMERIC_RE.is_match(part) {
                // Numeric identifiers must not carry leading zeros
                if part.len() > 1 && part.starts_with('0') {
                    return Err(InvalidIdentifier { offset });
                }
                let n = part.parse().map_err(|_| InvalidIdentifier { offset })?;
                identifiers.push(Identifier::Numeric(n));
            } else {
                identifiers.push(Identifier::Alphanumeric(part.to_string()));
            }
            Ok(())
        })?;
        Ok(Prerelease { identifiers })
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prerelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Pairwise, then the shorter prefix sorts first
            (false, false) => self.identifiers.cmp(&other.identifiers),
        }
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identifier) in self.identifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", identifier)?;
        }
        Ok(())
    }
}

/// The `+` suffix of a version, carried verbatim and never compared
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BuildMetadata {
    identifiers: Vec<String>,
}

impl BuildMetadata {
    pub const EMPTY: BuildMetadata = BuildMetadata {
        identifiers: Vec::new(),
    };

    /// Parse dot-separated build metadata, without the leading `+`
    pub fn parse(segment: &str) -> Result<Self, InvalidIdentifier> {
        let mut identifiers = Vec::new();
        for_each_identifier(segment, |part, _| {
            identifiers.push(part.to_string());
            Ok(())
        })?;
        Ok(BuildMetadata { identifiers })
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifiers.join("."))
    }
}
