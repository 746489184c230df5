//! Semantic versions and basis-anchored version ranges
//!
//! This crate parses `major.minor.patch[-prerelease][+build]` versions into a
//! totally ordered [`Version`] and provides set operations (containment,
//! intersection, union, difference, overlap) over [`Range`] values such as
//! `=1.2.3`, `~1.2.3`, `^1.2.3` and `+1.2.3`.

mod comparator;
pub mod identifier;
pub mod range;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use identifier::{BuildMetadata, Identifier, InvalidIdentifier, Prerelease};
pub use range::{Interval, Range, RangeDifference, RangeKind};
pub use semver::Semver;
pub use version::{Version, COMPONENT_MAX, MAX_VERSION};
pub use version_parser::{VersionParser, VersionParserError};
