//! Property-based tests for version ordering and range algebra

use std::cmp::Ordering;

use anchor_semver::{Range, RangeKind, Version};
use proptest::prelude::*;

fn release() -> impl Strategy<Value = Version> {
    (0u64..4, 0u64..4, 0u64..4).prop_map(|(major, minor, patch)| Version::new(major, minor, patch))
}

fn any_version() -> impl Strategy<Value = Version> {
    let prereleases = vec!["alpha", "alpha.1", "alpha.beta", "beta", "beta.2", "beta.11", "rc.1", "0", "1"];
    let builds = vec!["build", "001", "exp.sha.5114f85"];
    (
        release(),
        proptest::option::of(proptest::sample::select(prereleases)),
        proptest::option::of(proptest::sample::select(builds)),
    )
        .prop_map(|(version, pre, build)| {
            let mut s = version.to_string();
            if let Some(pre) = pre {
                s.push('-');
                s.push_str(pre);
            }
            if let Some(build) = build {
                s.push('+');
                s.push_str(build);
            }
            Version::parse(&s).unwrap()
        })
}

fn kind() -> impl Strategy<Value = RangeKind> {
    proptest::sample::select(vec![
        RangeKind::Exact,
        RangeKind::SameMinor,
        RangeKind::SameMajor,
        RangeKind::AnythingGreater,
    ])
}

fn any_range() -> impl Strategy<Value = Range> {
    (any_version(), kind()).prop_map(|(basis, kind)| Range::new(basis, kind))
}

fn release_range() -> impl Strategy<Value = Range> {
    (release(), kind()).prop_map(|(basis, kind)| Range::new(basis, kind))
}

proptest! {
    #[test]
    fn test_order_is_antisymmetric(a in any_version(), b in any_version()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
    }

    #[test]
    fn test_order_is_transitive(a in any_version(), b in any_version(), c in any_version()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
        if a.cmp(&b) == Ordering::Equal && b.cmp(&c) == Ordering::Equal {
            prop_assert_eq!(a, c);
        }
    }

    #[test]
    fn test_version_display_round_trip(v in any_version()) {
        let rendered = v.to_string();
        let parsed = Version::parse(&rendered).unwrap();
        prop_assert_eq!(&parsed, &v);
        prop_assert_eq!(parsed.to_string(), rendered);
    }

    #[test]
    fn test_range_display_round_trip(r in any_range()) {
        prop_assert_eq!(Range::parse(&r.to_string()).unwrap(), r);
    }

    #[test]
    fn test_intersection_is_commutative(a in any_range(), b in any_range()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn test_union_is_commutative(a in any_range(), b in any_range()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn test_overlap_is_symmetric(a in any_range(), b in any_range()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn test_range_contains_itself(r in any_range()) {
        prop_assert!(r.contains_range(&r));
        prop_assert!(r.contains(r.basis()));
        prop_assert_eq!(r.intersection(&r), Some(r.clone()));
        prop_assert_eq!(r.union(&r), Some(r.clone()));
    }

    #[test]
    fn test_intersection_is_inside_both(a in release_range(), b in release_range()) {
        if let Some(both) = a.intersection(&b) {
            prop_assert!(a.contains_range(&both));
            prop_assert!(b.contains_range(&both));
        }
    }

    #[test]
    fn test_union_covers_both(a in release_range(), b in release_range()) {
        if let Some(either) = a.union(&b) {
            prop_assert!(either.contains_range(&a));
            prop_assert!(either.contains_range(&b));
        }
    }

    #[test]
    fn test_release_containment_matches_interval(r in release_range(), v in release()) {
        prop_assert_eq!(r.contains(&v), r.to_interval().contains(&v));
    }

    #[test]
    fn test_difference_partitions_releases(a in release_range(), b in release_range(), v in release()) {
        let diff = a.difference(&b);
        let in_pieces = diff.pieces().any(|piece| piece.contains(&v));
        prop_assert_eq!(in_pieces, a.contains(&v) && !b.contains(&v));
    }

    #[test]
    fn test_max_satisfying_ignores_order(r in any_range(), versions in proptest::collection::vec(any_version(), 0..12)) {
        let forward = r.max_satisfying(&versions).cloned();
        let reversed: Vec<Version> = versions.iter().rev().cloned().collect();
        prop_assert_eq!(forward.clone(), r.max_satisfying(&reversed).cloned());
        if let Some(best) = forward {
            prop_assert!(r.contains(&best));
            prop_assert!(versions.iter().filter(|v| r.contains(v)).all(|v| v <= &best));
        }
    }
}

#[test]
fn test_documented_examples() {
    let _ = env_logger::builder().is_test(true).try_init();

    let exact = Range::parse("1.2.3").unwrap();
    assert!(exact.contains(&Version::parse("1.2.3").unwrap()));
    assert!(!exact.contains(&Version::parse("1.2.4").unwrap()));

    assert_eq!(
        Range::parse("~1.2.3").unwrap().first_bad_version(),
        Version::new(1, 3, 0)
    );
    assert_eq!(
        Range::parse("^1.2.3").unwrap().first_bad_version(),
        Version::new(2, 0, 0)
    );

    let caret = Range::parse("^1.6.2").unwrap();
    assert_eq!(caret.union(&Range::parse("4.1.2").unwrap()), None);

    let alpha = Version::parse("1.2.3-alpha").unwrap();
    assert!(!Range::parse("+1.2.3").unwrap().contains(&alpha));
    assert!(!Range::parse("+1.2.0").unwrap().contains(&alpha));

    let versions: Vec<Version> = ["1.0.3", "3.1.2", "1.8.3"]
        .iter()
        .map(|s| Version::parse(s).unwrap())
        .collect();
    assert_eq!(
        Range::parse("^1.2.3").unwrap().max_satisfying(&versions),
        Some(&Version::new(1, 8, 3))
    );
}
