//! Semver facade providing string-level version operations

use crate::{Range, Version};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        let range = match Range::parse(range) {
            Ok(r) => r,
            Err(_) => return false,
        };

        range.contains(&version)
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = match Range::parse(range) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| Version::parse(v).is_ok_and(|parsed| range.contains(&parsed)))
            .map(|v| v.to_string())
            .collect()
    }

    /// Return the greatest version that satisfies the given range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let range = Range::parse(range).ok()?;

        let parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .filter(|(v, _)| range.contains(v))
            .collect();

        parsed
            .into_iter()
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, i)| versions[i].to_string())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Parsed versions with their input index; unparsable ones are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            if ascending {
                a.cmp(b)
            } else {
                b.cmp(a)
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfies_positive() {
        assert!(Semver::satisfies("1.2.3", "*"));
        assert!(Semver::satisfies("1.2.3", "1.2.3"));
        assert!(Semver::satisfies("1.2.3+build.5", "=1.2.3"));
        assert!(Semver::satisfies("1.2.3", "+1.2.3"));
        assert!(Semver::satisfies("9.0.0", "+1.2.3"));

        // Tilde
        assert!(Semver::satisfies("1.2.0", "~1.2.0"));
        assert!(Semver::satisfies("1.2.99", "~1.2.0"));

        // Caret
        assert!(Semver::satisfies("1.8.1", "^1.2.3"));
        assert!(Semver::satisfies("0.1.2", "^0.1.2"));
        assert!(Semver::satisfies("0.9.0", "^0.1.2"));
        assert!(Semver::satisfies("0.0.1-beta", "^0.0.1-alpha"));
    }

    #[test]
    fn test_satisfies_negative() {
        // Exact version mismatch
        assert!(!Semver::satisfies("1.0.1", "1.0.0"));

        // Prerelease against release ranges
        assert!(!Semver::satisfies("1.2.3-beta", "^1.2.3"));
        assert!(!Semver::satisfies("2.0.0-alpha", "^1.2.3"));
        assert!(!Semver::satisfies("1.2.3-alpha", "+1.2.0"));

        // Tilde
        assert!(!Semver::satisfies("1.3.0", "~1.2.0"));
        assert!(!Semver::satisfies("1.1.9", "~1.2.0"));

        // Caret
        assert!(!Semver::satisfies("1.2.2", "^1.2.3"));
        assert!(!Semver::satisfies("2.0.0", "^1.2.3"));

        // Unparsable input never satisfies
        assert!(!Semver::satisfies("v1.2.3", "*"));
        assert!(!Semver::satisfies("1.2", "*"));
        assert!(!Semver::satisfies("1.2.3", ">=1.2.3"));
        assert!(!Semver::satisfies("1.2.3", "1.2.x"));
    }

    #[test]
    fn test_satisfied_by() {
        let versions = vec!["1.0.0", "1.2.0", "1.9999.9999", "2.0.0", "2.1.0", "0.9999.9999"];
        let result = Semver::satisfied_by(&versions, "^1.0.0");
        assert_eq!(result, vec!["1.0.0", "1.2.0", "1.9999.9999"]);

        let versions2 = vec!["0.1.1", "0.1.9999", "0.2.0", "0.2.1", "0.3.0", "junk"];
        let result2 = Semver::satisfied_by(&versions2, "~0.2.0");
        assert_eq!(result2, vec!["0.2.0", "0.2.1"]);

        assert!(Semver::satisfied_by(&versions2, "not a range").is_empty());
    }

    #[test]
    fn test_max_satisfying() {
        let versions = vec!["1.0.3", "3.1.2", "1.8.3", "nope"];
        assert_eq!(Semver::max_satisfying(&versions, "^1.2.3"), Some("1.8.3".to_string()));
        assert_eq!(Semver::max_satisfying(&versions, "+1.0.0"), Some("3.1.2".to_string()));
        assert_eq!(Semver::max_satisfying(&versions, "^2.0.0"), None);
        assert_eq!(Semver::max_satisfying(&versions, "%"), None);
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["0.1.0", "0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]);

        let versions2 = vec!["1.0.0-rc.1", "1.0.0-beta.11", "1.0.0-beta.2", "1.0.0"];
        let sorted2 = Semver::sort(&versions2);
        assert_eq!(sorted2, vec!["1.0.0-beta.2", "1.0.0-beta.11", "1.0.0-rc.1", "1.0.0"]);

        // Equal versions keep their input order
        let versions3 = vec!["1.0.0+b", "0.5.0", "1.0.0+a", "bogus"];
        assert_eq!(Semver::sort(&versions3), vec!["0.5.0", "1.0.0+b", "1.0.0+a"]);
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0", "0.1.0"]);
    }
}
