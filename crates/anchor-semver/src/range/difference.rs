//! Result of subtracting one range from another

use super::Interval;

/// What is left of a range after removing another from it
///
/// `before` holds the versions below the removed range, `after` those above
/// it. Either side may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeDifference {
    pub before: Option<Interval>,
    pub after: Option<Interval>,
}

impl RangeDifference {
    pub fn new(before: Option<Interval>, after: Option<Interval>) -> Self {
        RangeDifference { before, after }
    }

    /// Check if nothing is left
    pub fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none()
    }

    /// The remaining pieces in ascending order
    pub fn pieces(&self) -> impl Iterator<Item = &Interval> {
        self.before.iter().chain(self.after.iter())
    }
}
