//! # Validated input scanning
//!
//! Provides the [`Scanner`] for pulling whitespace-delimited integer tokens
//! out of any [`std::io::BufRead`] source, and [`Bounds`] for the inclusive
//! range every value is checked against before it reaches the caller.

pub mod scanner;

pub use scanner::Scanner;

use crate::errors::InputError;

/// Highest element count accepted by [`Scanner::read_count`].
///
/// The ceiling is a policy choice, not a mathematical necessity: it bounds
/// the memory a subsequent sequence read may allocate. Callers that need a
/// different ceiling build their own range with [`Bounds::count`].
pub const DEFAULT_COUNT_CEILING: i64 = 1_000_000;

/// An inclusive `[min, max]` admissible range for one integer read.
///
/// `min <= max` is the caller's responsibility and is not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    /// Create a range covering `min..=max`.
    ///
    /// # Example
    ///
    /// ```
    /// # use contest_kit::scan::Bounds;
    /// let bounds = Bounds::new(1, 100);
    /// assert!(bounds.contains(1));
    /// assert!(bounds.contains(100));
    /// assert!(!bounds.contains(0));
    /// ```
    pub const fn new(min: i64, max: i64) -> Self {
        Bounds { min, max }
    }

    /// The whole signed 64-bit range; every parseable value is admissible.
    pub const fn full() -> Self {
        Bounds::new(i64::MIN, i64::MAX)
    }

    /// The range for an element count capped at `ceiling`: `1..=ceiling`.
    ///
    /// # Example
    ///
    /// ```
    /// # use contest_kit::scan::Bounds;
    /// let count = Bounds::count(10);
    /// assert!(!count.contains(0));
    /// assert!(count.contains(10));
    /// assert!(!count.contains(11));
    /// ```
    pub const fn count(ceiling: i64) -> Self {
        Bounds::new(1, ceiling)
    }

    /// Whether `value` lies within the range.
    pub const fn contains(self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Admit `value`, or report which bound it violated.
    ///
    /// # Example
    ///
    /// ```
    /// # use contest_kit::scan::Bounds;
    /// let bounds = Bounds::new(-5, 5);
    /// assert_eq!(bounds.check(3).unwrap(), 3);
    /// assert!(bounds.check(6).is_err());
    /// ```
    pub fn check(self, value: i64) -> Result<i64, InputError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(InputError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::full()
    }
}
