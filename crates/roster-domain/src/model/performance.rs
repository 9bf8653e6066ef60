//! Performance - Qualitative rating derived from an average grade
//!
//! Performance is a Value Object: two ratings with the same variant are equal.

/// Rating buckets, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Performance {
    /// Grade strictly above 8.0
    Excellent,
    /// Grade in [6.0, 8.0]
    Good,
    /// Grade in [4.0, 6.0)
    Satisfactory,
    /// Grade below 4.0
    Unsatisfactory,
}

impl Performance {
    /// Lower bound (exclusive) of the Excellent bucket
    pub const EXCELLENT_ABOVE: f64 = 8.0;
    /// Lower bound (inclusive) of the Good bucket
    pub const GOOD_FROM: f64 = 6.0;
    /// Lower bound (inclusive) of the Satisfactory bucket
    pub const SATISFACTORY_FROM: f64 = 4.0;

    /// Rate an average grade.
    ///
    /// Boundary values fall into the higher bucket, except 8.0 which is
    /// still Good: the top cut is strict.
    pub fn from_grade(grade: f64) -> Self {
        if grade > Self::EXCELLENT_ABOVE {
            Performance::Excellent
        } else if grade >= Self::GOOD_FROM {
            Performance::Good
        } else if grade >= Self::SATISFACTORY_FROM {
            Performance::Satisfactory
        } else {
            Performance::Unsatisfactory
        }
    }

    /// Get the display label of this rating
    pub fn label(&self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent",
            Performance::Good => "Good",
            Performance::Satisfactory => "Satisfactory",
            Performance::Unsatisfactory => "Unsatisfactory",
        }
    }

    /// Get all ratings (useful for iteration)
    pub fn all() -> &'static [Performance] {
        &[
            Performance::Excellent,
            Performance::Good,
            Performance::Satisfactory,
            Performance::Unsatisfactory,
        ]
    }
}

impl core::fmt::Display for Performance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}
