use std::fmt::{Debug, Display, Formatter};

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Interval {
    /// Inclusive.
    pub start: DateTime<FixedOffset>,

    /// Exclusive.
    pub end: DateTime<FixedOffset>,
}

impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

/// Wall-clock hours and minutes in the interval's own offset.
impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl Interval {
    pub const fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    pub const fn from_std(range: std::ops::Range<DateTime<FixedOffset>>) -> Self {
        Self { start: range.start, end: range.end }
    }

    pub const fn with_end(mut self, end: DateTime<FixedOffset>) -> Self {
        self.end = end;
        self
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, other: DateTime<FixedOffset>) -> bool {
        (self.start <= other) && (other < self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("2025-01-15T{hour:02}:00:00+01:00")).unwrap()
    }

    #[test]
    fn test_contains_half_open() {
        let interval = Interval::new(at(2), at(4));
        assert!(!interval.contains(at(1)));
        assert!(interval.contains(at(2)));
        assert!(interval.contains(at(3)));
        assert!(!interval.contains(at(4)));
    }

    #[test]
    fn test_duration() {
        assert_eq!(Interval::from_std(at(2)..at(4)).duration(), TimeDelta::hours(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(at(2), at(4)).to_string(), "02:00–04:00");
    }
}
