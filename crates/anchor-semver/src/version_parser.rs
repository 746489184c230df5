//! Version string parsing

use thiserror::Error;

use crate::identifier::{BuildMetadata, Prerelease};
use crate::{Version, COMPONENT_MAX};

/// Error type for version and range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid semantic version \"{version}\" at offset {offset}")]
    InvalidVersion { version: String, offset: usize },
    #[error("Invalid version range string \"{0}\"")]
    InvalidRange(String),
}

/// Read a run of ASCII digits starting at `start`
///
/// Returns the value and the index just past the digits, or the offset of
/// the component when it is missing or not below `COMPONENT_MAX`.
fn read_component(version: &str, start: usize) -> Result<(u64, usize), usize> {
    let rest = &version.as_bytes()[start..];
    let len = rest.iter().position(|b| !b.is_ascii_digit()).unwrap_or(rest.len());
    if len == 0 {
        return Err(start);
    }
    let end = start + len;
    let value: u64 = version[start..end].parse().map_err(|_| start)?;
    // COMPONENT_MAX is reserved for MAX_VERSION
    if value == COMPONENT_MAX {
        return Err(start);
    }
    Ok((value, end))
}

fn expect_dot(version: &str, pos: usize) -> Result<usize, usize> {
    match version.as_bytes().get(pos) {
        Some(b'.') => Ok(pos + 1),
        _ => Err(pos),
    }
}

/// Parser for `major.minor.patch[-prerelease][+build]`
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check whether a string is a valid version
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string
    ///
    /// No surrounding whitespace or `v` prefix is accepted. On failure the
    /// error carries the input and the byte offset where parsing stopped.
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let invalid = |offset: usize| VersionParserError::InvalidVersion {
            version: version.to_string(),
            offset,
        };

        let (major, pos) = read_component(version, 0).map_err(invalid)?;
        let pos = expect_dot(version, pos).map_err(invalid)?;
        let (minor, pos) = read_component(version, pos).map_err(invalid)?;
        let pos = expect_dot(version, pos).map_err(invalid)?;
        let (patch, mut pos) = read_component(version, pos).map_err(invalid)?;

        let bytes = version.as_bytes();
        let mut parsed = Version::new(major, minor, patch);

        if bytes.get(pos) == Some(&b'-') {
            let start = pos + 1;
            let end = version[start..].find('+').map_or(version.len(), |n| start + n);
            parsed.prerelease = Prerelease::parse(&version[start..end])
                .map_err(|e| invalid(start + e.offset()))?;
            pos = end;
        }

        if bytes.get(pos) == Some(&b'+') {
            let start = pos + 1;
            parsed.build_metadata = BuildMetadata::parse(&version[start..])
                .map_err(|e| invalid(start + e.offset()))?;
            pos = version.len();
        }

        if pos != version.len() {
            return Err(invalid(pos));
        }

        Ok(parsed)
    }
}
