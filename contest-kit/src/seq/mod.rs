//! # Sequence helpers
//!
//! Overflow-aware slice summation and the formatting/table helpers shared
//! by the other snippet modules.

pub mod grid;

pub use grid::{format_grid, make_grid};

use std::fmt::Display;

use itertools::Itertools;
use num_traits::{CheckedAdd, Zero};

/// Sums a slice without ever wrapping: `None` as soon as a partial sum
/// leaves the representable range.
///
/// The slice-shaped sibling of [`crate::accum::checked_total`], generic
/// over any integer width.
///
/// # Example
///
/// ```
/// # use contest_kit::seq::checked_sum;
/// assert_eq!(checked_sum(&[1i64, 2, 3]), Some(6));
/// assert_eq!(checked_sum(&[i64::MAX, 1]), None);
/// assert_eq!(checked_sum(&[250u8, 5]), Some(255));
/// assert_eq!(checked_sum::<i32>(&[]), Some(0));
/// ```
pub fn checked_sum<T: CheckedAdd + Zero + Copy>(values: &[T]) -> Option<T> {
    values
        .iter()
        .try_fold(T::zero(), |total, value| total.checked_add(value))
}

/// Renders a slice as one space-separated line, ready for output.
///
/// # Example
///
/// ```
/// # use contest_kit::seq::format_row;
/// assert_eq!(format_row(&[3, -1, 4]), "3 -1 4");
/// assert_eq!(format_row::<i64>(&[]), "");
/// ```
pub fn format_row<T: Display>(row: &[T]) -> String {
    row.iter().join(" ")
}
