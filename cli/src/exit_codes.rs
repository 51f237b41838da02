//! Exit codes for the `ckit` binary.
//!
//! Flag misuse never reaches `main`'s dispatch: clap rejects it first with
//! its conventional status 2.

pub const SUCCESS: i32 = 0;
pub const INPUT_ERROR: i32 = 1; // Any parse, range, overflow or I/O failure
