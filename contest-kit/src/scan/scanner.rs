//! Whitespace-token reader over buffered input.

use std::io::BufRead;

use crate::errors::InputError;
use crate::scan::{Bounds, DEFAULT_COUNT_CEILING};

/// Reads whitespace-delimited integer tokens from a [`BufRead`] source.
///
/// Tokens may be separated by any mix of spaces, tabs and newlines. Each
/// read consumes its token and the separator that ended it, so consecutive
/// reads walk the stream left to right. Wrap `stdin.lock()` for console
/// input, or a byte slice in tests:
///
/// ```
/// # use contest_kit::scan::Scanner;
/// let mut scanner = Scanner::new("42 -7".as_bytes());
/// assert_eq!(scanner.read_i64().unwrap(), 42);
/// assert_eq!(scanner.read_i64().unwrap(), -7);
/// assert!(scanner.read_i64().is_err()); // exhausted
/// ```
pub struct Scanner<R> {
    source: R,
    token: Vec<u8>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(source: R) -> Self {
        Scanner {
            source,
            token: Vec::new(),
        }
    }

    /// Fills `self.token` with the next token's bytes.
    ///
    /// Returns `false` once the source is exhausted before any token byte.
    /// Tokens can span internal buffer boundaries, so this keeps pulling
    /// buffers until a separator or end of input closes the token.
    fn advance(&mut self) -> Result<bool, InputError> {
        self.token.clear();
        loop {
            let buffer = self.source.fill_buf()?;
            if buffer.is_empty() {
                break;
            }
            let mut used = 0;
            let mut complete = false;
            for &byte in buffer {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if self.token.is_empty() {
                        continue;
                    }
                    complete = true;
                    break;
                }
                self.token.push(byte);
            }
            self.source.consume(used);
            if complete {
                break;
            }
        }
        Ok(!self.token.is_empty())
    }

    /// Parse the next token as a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// [`InputError::EndOfInput`] when the stream is exhausted,
    /// [`InputError::Malformed`] when the token is not a decimal integer or
    /// does not fit in an `i64`.
    pub fn read_i64(&mut self) -> Result<i64, InputError> {
        if !self.advance()? {
            return Err(InputError::EndOfInput);
        }
        let token = String::from_utf8_lossy(&self.token);
        token
            .parse()
            .map_err(|_| InputError::Malformed(token.into_owned()))
    }

    /// Parse the next token and admit it only within `bounds`.
    ///
    /// # Example
    ///
    /// ```
    /// # use contest_kit::scan::{Bounds, Scanner};
    /// let mut scanner = Scanner::new("5 500".as_bytes());
    /// assert_eq!(scanner.read_bounded(Bounds::new(1, 100)).unwrap(), 5);
    /// assert!(scanner.read_bounded(Bounds::new(1, 100)).is_err());
    /// ```
    pub fn read_bounded(&mut self, bounds: Bounds) -> Result<i64, InputError> {
        bounds.check(self.read_i64()?)
    }

    /// Read a leading element count, validated against
    /// `1..=`[`DEFAULT_COUNT_CEILING`].
    pub fn read_count(&mut self) -> Result<i64, InputError> {
        self.read_bounded(Bounds::count(DEFAULT_COUNT_CEILING))
    }

    /// Read `len` integers, each validated against `bounds`.
    ///
    /// Callers obtain `len` from a validated count first (for example
    /// [`Scanner::read_count`]), which keeps the allocation bounded.
    pub fn read_vec(&mut self, len: usize, bounds: Bounds) -> Result<Vec<i64>, InputError> {
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            values.push(self.read_bounded(bounds)?);
        }
        Ok(values)
    }
}
