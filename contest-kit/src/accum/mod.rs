//! # Overflow-checked accumulation
//!
//! The core pipeline: read a validated count, then fold exactly that many
//! validated integers into an `i64` total that is never allowed to wrap.
//! The first parse failure, range violation or would-be overflow aborts the
//! whole run with no partial result; turning the error into a process exit
//! is the front-end's job.

use std::io::BufRead;

use crate::errors::InputError;
use crate::scan::{Bounds, DEFAULT_COUNT_CEILING, Scanner};

/// Admission policy for one accumulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Accepted range for the leading element count.
    pub count: Bounds,
    /// Accepted range for every subsequent element.
    pub element: Bounds,
}

impl Default for Limits {
    /// Count capped at [`DEFAULT_COUNT_CEILING`], elements unrestricted.
    fn default() -> Self {
        Limits {
            count: Bounds::count(DEFAULT_COUNT_CEILING),
            element: Bounds::full(),
        }
    }
}

/// `total + term`, or [`InputError::Overflow`] when the true sum is not
/// representable as an `i64`.
///
/// `i64::checked_add` performs the sign-aware test before any wrapping
/// arithmetic can happen, in either direction.
///
/// # Example
///
/// ```
/// # use contest_kit::accum::checked_add;
/// assert_eq!(checked_add(10, -25).unwrap(), -15);
/// assert!(checked_add(i64::MAX, 1).is_err());
/// assert!(checked_add(i64::MIN, -1).is_err());
/// ```
pub fn checked_add(total: i64, term: i64) -> Result<i64, InputError> {
    total
        .checked_add(term)
        .ok_or(InputError::Overflow { total, term })
}

/// Read a count and that many integers from `scanner`, returning their sum.
///
/// Elements are streamed one at a time and folded through [`checked_add`],
/// so nothing is allocated and the reported failure is always the leftmost
/// one in the input.
///
/// # Example
///
/// ```
/// # use contest_kit::accum::{checked_total, Limits};
/// # use contest_kit::scan::Scanner;
/// let mut scanner = Scanner::new("5\n1 2 3 4 5\n".as_bytes());
/// assert_eq!(checked_total(&mut scanner, Limits::default()).unwrap(), 15);
/// ```
pub fn checked_total<R: BufRead>(
    scanner: &mut Scanner<R>,
    limits: Limits,
) -> Result<i64, InputError> {
    let n = scanner.read_bounded(limits.count)?;
    let mut total = 0i64;
    for _ in 0..n {
        let term = scanner.read_bounded(limits.element)?;
        total = checked_add(total, term)?;
    }
    Ok(total)
}
