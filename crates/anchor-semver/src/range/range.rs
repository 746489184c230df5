//! Basis-anchored version range

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::{Interval, RangeDifference, RangeKind};
use crate::{Version, VersionParserError, COMPONENT_MAX, MAX_VERSION};

/// A version range anchored at a basis version (e.g., "^1.2.3")
///
/// The kind decides which components of the basis are pinned. Everything
/// from the basis up to (but excluding) [`Range::first_bad_version`] is
/// inside the range, subject to the prerelease rule in [`Range::contains`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    basis: Version,
    kind: RangeKind,
}

impl Range {
    /// Create a new range
    pub fn new(basis: Version, kind: RangeKind) -> Self {
        Range { basis, kind }
    }

    /// The range matching every release version ("*")
    pub fn any() -> Self {
        Range::new(Version::new(0, 0, 0), RangeKind::AnythingGreater)
    }

    /// The range matching only `basis`
    pub fn exact(basis: Version) -> Self {
        Range::new(basis, RangeKind::Exact)
    }

    /// Parse a range string
    ///
    /// Accepts `*`, `=1.2.3`, `1.2.3`, `~1.2.3`, `^1.2.3` and `+1.2.3`.
    pub fn parse(range: &str) -> Result<Self, VersionParserError> {
        if range == "*" {
            return Ok(Range::any());
        }

        let invalid = || {
            log::trace!(
                "Rejecting range string {:?}, expected a version or one of {:?}",
                range,
                RangeKind::supported_prefixes()
            );
            VersionParserError::InvalidRange(range.to_string())
        };

        let first = range.chars().next().ok_or_else(invalid)?;
        let (kind, rest) = if first.is_ascii_digit() {
            (RangeKind::Exact, range)
        } else {
            let kind = RangeKind::from_prefix(first).ok_or_else(invalid)?;
            (kind, &range[first.len_utf8()..])
        };

        if rest.is_empty() {
            return Err(invalid());
        }

        let basis = Version::parse(rest)?;
        Ok(Range::new(basis, kind))
    }

    /// Get the basis version
    pub fn basis(&self) -> &Version {
        &self.basis
    }

    /// Get the kind
    pub fn kind(&self) -> RangeKind {
        self.kind
    }

    /// Exclusive upper bound of a bounded range
    ///
    /// Only the numeric components move; prerelease and build metadata are
    /// copied from the basis. A component already at [`COMPONENT_MAX`]
    /// carries into the next one up, and a bound past the last
    /// representable version is [`MAX_VERSION`].
    ///
    /// # Panics
    ///
    /// Panics for [`RangeKind::AnythingGreater`], which has no finite bound.
    pub fn first_bad_version(&self) -> Version {
        let basis = &self.basis;
        let bumped = match self.kind {
            RangeKind::Exact => increment(basis.major, basis.minor, basis.patch),
            RangeKind::SameMinor => increment(basis.major, basis.minor, COMPONENT_MAX),
            RangeKind::SameMajor => increment(basis.major, COMPONENT_MAX, COMPONENT_MAX),
            RangeKind::AnythingGreater => {
                panic!("Range {} has no first bad version", self);
            }
        };

        match bumped {
            Some((major, minor, patch)) => Version {
                major,
                minor,
                patch,
                ..basis.clone()
            },
            None => MAX_VERSION,
        }
    }

    /// Exclusive upper bound, with `MAX_VERSION` standing in for "unbounded"
    fn upper_bound(&self) -> Version {
        if self.kind.is_bounded() {
            self.first_bad_version()
        } else {
            MAX_VERSION
        }
    }

    /// The half-open interval `[basis, first_bad_version)` covered by this range
    pub fn to_interval(&self) -> Interval {
        match self.kind {
            RangeKind::Exact => Interval::exactly(self.basis.clone()),
            _ => Interval::between(self.basis.clone(), self.upper_bound()),
        }
    }

    /// Check if a version satisfies this range
    ///
    /// A candidate whose prerelease presence differs from the basis never
    /// matches, whatever the kind.
    pub fn contains(&self, version: &Version) -> bool {
        if version.is_prerelease() != self.basis.is_prerelease() {
            return false;
        }

        let basis = &self.basis;
        match self.kind {
            RangeKind::AnythingGreater => version >= basis,
            RangeKind::SameMajor => version.major == basis.major && version >= basis,
            RangeKind::SameMinor => {
                version.major == basis.major && version.minor == basis.minor && version >= basis
            }
            RangeKind::Exact => version == basis,
        }
    }

    /// Check if every version of `other` is also inside this range
    pub fn contains_range(&self, other: &Range) -> bool {
        if other.basis < self.basis {
            return false;
        }

        match (self.kind, other.kind) {
            (RangeKind::AnythingGreater, _) => true,
            (_, RangeKind::AnythingGreater) => false,
            _ => self.first_bad_version() >= other.first_bad_version(),
        }
    }

    /// Check if the two ranges share any version
    pub fn overlaps(&self, other: &Range) -> bool {
        self.contains(&other.basis) || other.contains(&self.basis)
    }

    /// Versions inside both ranges
    ///
    /// The intersection of two ranges is always another range, so `None`
    /// only means the two are disjoint.
    pub fn intersection(&self, other: &Range) -> Option<Range> {
        if other.basis < self.basis {
            return other.intersection(self);
        }

        let lower = &self.basis;
        let upper = &other.basis;
        let compatible = match self.kind {
            RangeKind::AnythingGreater => true,
            RangeKind::SameMajor => upper.major == lower.major,
            RangeKind::SameMinor => upper.major == lower.major && upper.minor == lower.minor,
            RangeKind::Exact => upper == lower,
        };

        if !compatible {
            log::trace!("Ranges {} and {} do not intersect", self, other);
            return None;
        }

        Some(Range::new(upper.clone(), self.kind.min(other.kind)))
    }

    /// Versions inside either range, when that set is itself a range
    ///
    /// Two ranges that neither overlap nor touch have no single range
    /// covering exactly their versions, and neither do some touching pairs
    /// (e.g., "^1.6.2" and "~2.0.0"). Both cases return `None`.
    pub fn union(&self, other: &Range) -> Option<Range> {
        if other.basis < self.basis {
            return other.union(self);
        }

        if self.contains_range(other) {
            return Some(self.clone());
        }

        let first_bad = self.first_bad_version();
        let union = match other.basis.cmp(&first_bad) {
            Ordering::Greater => None,
            Ordering::Equal => {
                // Edge to edge: only a wider kind can absorb the lower range
                let joins = match (self.kind, other.kind) {
                    (_, RangeKind::AnythingGreater) => true,
                    (RangeKind::SameMajor, RangeKind::SameMajor) => false,
                    (_, RangeKind::SameMajor) => true,
                    (RangeKind::Exact, RangeKind::SameMinor) => true,
                    _ => false,
                };
                joins
                    .then(|| Range::new(self.basis.clone(), other.kind))
                    .filter(|joined| joined.contains_range(other))
            }
            Ordering::Less => {
                if other.kind == RangeKind::AnythingGreater {
                    Some(Range::new(self.basis.clone(), RangeKind::AnythingGreater))
                } else {
                    Some(Range::new(self.basis.clone(), self.kind.max(other.kind)))
                }
            }
        };

        if union.is_none() {
            log::trace!("Union of {} and {} is not a single range", self, other);
        }
        union
    }

    /// The parts of this range not covered by `other`
    pub fn difference(&self, other: &Range) -> RangeDifference {
        let this = self.to_interval();

        if !self.overlaps(other) {
            return if self.basis < other.basis {
                RangeDifference::new(Some(this), None)
            } else {
                RangeDifference::new(None, Some(this))
            };
        }

        let that = other.to_interval();
        let before = (self.basis < other.basis)
            .then(|| Interval::between(self.basis.clone(), other.basis.clone()));
        let after = (this.high() > that.high())
            .then(|| Interval::between(that.high().clone(), this.high().clone()));

        RangeDifference::new(before, after)
    }

    /// The greatest version in `versions` that satisfies this range
    pub fn max_satisfying<'a, I>(&self, versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions.into_iter().filter(|v| self.contains(v)).max()
    }
}

/// Bump `patch`, carrying into `minor` and `major` when a component is at
/// [`COMPONENT_MAX`]
fn increment(major: u64, minor: u64, patch: u64) -> Option<(u64, u64, u64)> {
    if patch < COMPONENT_MAX {
        Some((major, minor, patch + 1))
    } else if minor < COMPONENT_MAX {
        Some((major, minor + 1, 0))
    } else if major < COMPONENT_MAX {
        Some((major + 1, 0, 0))
    } else {
        None
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == RangeKind::AnythingGreater
            && self.basis == Version::new(0, 0, 0)
            && self.basis.build_metadata.is_empty()
        {
            return f.write_str("*");
        }
        write!(f, "{}{}", self.kind.prefix(), self.basis)
    }
}

impl FromStr for Range {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Range::parse(&s).map_err(serde::de::Error::custom)
    }
}
