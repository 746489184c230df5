//! Half-open interval between two versions

use std::cmp;
use std::fmt;
use std::str::FromStr;

use super::{Range, RangeDifference};
use crate::{BuildMetadata, Version, VersionParserError, MAX_VERSION};

/// The versions in `[low, high)`
///
/// Unlike [`Range`], an interval is not tied to a basis kind and has no
/// prerelease rule: every version between the two endpoints is inside.
/// A `high` of [`MAX_VERSION`] means there is no upper bound, and the
/// interval then also holds `MAX_VERSION` itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    low: Version,
    high: Version,
}

impl Interval {
    /// Create a new interval, or `None` if it would hold no version
    pub fn new(low: Version, high: Version) -> Option<Self> {
        (high > low || high == MAX_VERSION).then_some(Interval { low, high })
    }

    /// Build an interval whose endpoints are already known to be ordered
    pub(crate) fn between(low: Version, high: Version) -> Self {
        debug_assert!(high > low || high == MAX_VERSION, "Invalid interval {}<{}", low, high);
        Interval { low, high }
    }

    /// Every version from 0.0.0 up
    pub fn everything() -> Self {
        Interval::between(Version::new(0, 0, 0), MAX_VERSION)
    }

    /// From `version` up to the first bad version of `=version`
    pub fn exactly(version: Version) -> Self {
        let high = Range::exact(version.clone()).first_bad_version();
        Interval::between(version, high)
    }

    /// Parse `low<high`, or any range string
    pub fn parse(interval: &str) -> Result<Self, VersionParserError> {
        match interval.split_once('<') {
            Some((low, high)) => {
                let low = Version::parse(low)?;
                let high = Version::parse(high)?;
                Interval::new(low, high).ok_or_else(|| {
                    log::trace!("Rejecting empty interval {:?}", interval);
                    VersionParserError::InvalidRange(interval.to_string())
                })
            }
            None => Ok(Range::parse(interval)?.to_interval()),
        }
    }

    /// Inclusive lower endpoint
    pub fn low(&self) -> &Version {
        &self.low
    }

    /// Exclusive upper endpoint
    pub fn high(&self) -> &Version {
        &self.high
    }

    /// Check if the interval has no finite upper endpoint
    pub fn is_unbounded(&self) -> bool {
        self.high == MAX_VERSION
    }

    /// Check if a version lies inside the interval
    pub fn contains(&self, version: &Version) -> bool {
        &self.low <= version && (version < &self.high || self.is_unbounded())
    }

    /// Check if every version of `other` is also inside this interval
    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.low <= other.low && self.high >= other.high
    }

    /// Check if the two intervals share any version
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.contains(&other.low) || other.contains(&self.low)
    }

    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let low = cmp::max(&self.low, &other.low);
        let high = cmp::min(&self.high, &other.high);
        Interval::new(low.clone(), high.clone())
    }

    /// Smallest interval covering both, if they overlap or touch
    pub fn union(&self, other: &Interval) -> Option<Interval> {
        if self.high < other.low || other.high < self.low {
            log::trace!("Intervals {} and {} leave a gap", self, other);
            return None;
        }
        let low = cmp::min(&self.low, &other.low);
        let high = cmp::max(&self.high, &other.high);
        Some(Interval::between(low.clone(), high.clone()))
    }

    /// The parts of this interval not covered by `other`
    pub fn difference(&self, other: &Interval) -> RangeDifference {
        if !self.overlaps(other) {
            return if self.low < other.low {
                RangeDifference::new(Some(self.clone()), None)
            } else {
                RangeDifference::new(None, Some(self.clone()))
            };
        }

        let before = (self.low < other.low)
            .then(|| Interval::between(self.low.clone(), other.low.clone()));
        let after = (self.high > other.high)
            .then(|| Interval::between(other.high.clone(), self.high.clone()));
        RangeDifference::new(before, after)
    }

    /// The greatest version in `versions` inside this interval
    pub fn max_satisfying<'a, I>(&self, versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions.into_iter().filter(|v| self.contains(v)).max()
    }
}

impl From<&Range> for Interval {
    fn from(range: &Range) -> Self {
        range.to_interval()
    }
}

impl From<Range> for Interval {
    fn from(range: Range) -> Self {
        range.to_interval()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            return write!(f, "+{}", self.low);
        }

        // Build metadata never moves an endpoint, so the high end drops it
        let high = Version {
            build_metadata: BuildMetadata::EMPTY,
            ..self.high.clone()
        };
        write!(f, "{}<{}", self.low, high)
    }
}

impl FromStr for Interval {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Interval::parse(&s).map_err(serde::de::Error::custom)
    }
}
