//! Version ranges and the set operations between them

mod difference;
mod interval;
mod kind;
mod range;

pub use difference::RangeDifference;
pub use interval::Interval;
pub use kind::RangeKind;
pub use range::Range;
