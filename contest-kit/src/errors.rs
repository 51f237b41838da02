#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// The stream ran out before the expected token appeared.
    #[error("unexpected end of input while reading an integer")]
    EndOfInput,
    /// A token was present but does not spell a signed 64-bit integer.
    #[error("malformed integer token `{0}`")]
    Malformed(String),
    /// A parsed value violates the caller-supplied inclusive bounds.
    #[error("value {value} out of range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },
    /// Adding `term` to `total` would leave the signed 64-bit range.
    #[error("sum overflow computing {total} + {term}")]
    Overflow { total: i64, term: i64 },

    #[error("input read failed: {0}")]
    Io(#[from] std::io::Error),
}
