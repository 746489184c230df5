//! Version comparison utilities

use std::cmp::Ordering;

use crate::Version;

/// Comparator for ordering versions
///
/// Every relational check funnels through [`Comparator::compare`], which is
/// also what backs the `Ord` and `PartialEq` impls on [`Version`].
pub struct Comparator;

impl Comparator {
    /// Three-way comparison of major, minor, patch and then prerelease
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        version1
            .major
            .cmp(&version2.major)
            .then(version1.minor.cmp(&version2.minor))
            .then(version1.patch.cmp(&version2.patch))
            .then_with(|| version1.prerelease.cmp(&version2.prerelease))
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Greater
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Equal
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Equal
    }
}
