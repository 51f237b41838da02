//! 2D table construction and rendering.

use std::fmt::Display;

use itertools::Itertools;

use crate::seq::format_row;

/// Allocates a `rows x cols` table filled with `fill`.
///
/// The snippet modules build their DP tables with this instead of nesting
/// `vec!` macros at every call site.
///
/// # Example
///
/// ```
/// # use contest_kit::seq::make_grid;
/// let table = make_grid(2, 3, 0u64);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[0], vec![0, 0, 0]);
/// ```
pub fn make_grid<T: Clone>(rows: usize, cols: usize, fill: T) -> Vec<Vec<T>> {
    vec![vec![fill; cols]; rows]
}

/// Renders a table row-per-line, cells space-separated.
///
/// # Example
///
/// ```
/// # use contest_kit::seq::format_grid;
/// let table = vec![vec![1, 2], vec![3, 4]];
/// assert_eq!(format_grid(&table), "1 2\n3 4");
/// ```
pub fn format_grid<T: Display>(grid: &[Vec<T>]) -> String {
    grid.iter().map(|row| format_row(row)).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_grid_rows_are_independent() {
        let mut table = make_grid(2, 2, 0);
        table[0][0] = 9;
        assert_eq!(table[1][0], 0);
    }

    #[test]
    fn make_grid_zero_dimensions() {
        assert!(make_grid(0, 5, 1).is_empty());
        let empty_cols = make_grid(3, 0, 1);
        assert_eq!(empty_cols.len(), 3);
        assert!(empty_cols[0].is_empty());
    }

    #[test]
    fn format_grid_single_row() {
        assert_eq!(format_grid(&[vec![7, 8, 9]]), "7 8 9");
    }

    #[test]
    fn format_grid_empty() {
        assert_eq!(format_grid::<i64>(&[]), "");
    }
}
