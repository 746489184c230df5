//! Semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::identifier::{BuildMetadata, Prerelease};
use crate::{Comparator, VersionParser, VersionParserError};

/// Largest value of a numeric component, used for open-ended bounds
pub const COMPONENT_MAX: u64 = u64::MAX;

/// Sorts above every version that can be parsed from real input
pub const MAX_VERSION: Version = Version::new(COMPONENT_MAX, COMPONENT_MAX, COMPONENT_MAX);

/// A semantic version
///
/// Equality, ordering and hashing only look at `major`, `minor`, `patch`
/// and `prerelease`. Build metadata is carried for display only.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Prerelease,
    pub build_metadata: BuildMetadata,
}

impl Version {
    /// Create a release version with no prerelease or build metadata
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Prerelease::EMPTY,
            build_metadata: BuildMetadata::EMPTY,
        }
    }

    /// Parse `major.minor.patch[-prerelease][+build]`
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(version)
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Smallest release version strictly above this one, ignoring any prerelease tag
    pub fn next_after(&self) -> Version {
        Version::new(self.major, self.minor, self.patch.saturating_add(1))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}
