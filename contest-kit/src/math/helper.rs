/// Computes the greatest common divisor of two numbers (recursive Euclid).
///
/// The result is non-negative regardless of the operands' signs, and
/// `gcd(0, 0) == 0`.
///
/// # Example
///
/// ```
/// # use contest_kit::math::gcd;
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(-54, 24), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

/// Computes the least common multiple.
///
/// Divides by the gcd before multiplying, which keeps the intermediate
/// small; the final result must still fit in an `i64`. `lcm(0, _)` and
/// `lcm(_, 0)` are 0.
///
/// # Example
///
/// ```
/// # use contest_kit::math::lcm;
/// assert_eq!(lcm(12, 18), 36);
/// assert_eq!(lcm(-4, 6), 12);
/// assert_eq!(lcm(0, 9), 0);
/// ```
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// Sum of the decimal digits of `n`.
///
/// # Example
///
/// ```
/// # use contest_kit::math::digit_sum;
/// assert_eq!(digit_sum(12345), 15);
/// assert_eq!(digit_sum(0), 0);
/// ```
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Decimal digits of `n` in reverse order.
///
/// Trailing zeros vanish, exactly as the textbook loop leaves them:
/// `reverse_digits(1200) == 21`.
///
/// # Example
///
/// ```
/// # use contest_kit::math::reverse_digits;
/// assert_eq!(reverse_digits(12345), 54321);
/// assert_eq!(reverse_digits(7), 7);
/// ```
pub fn reverse_digits(mut n: u64) -> u64 {
    let mut reversed = 0;
    while n > 0 {
        reversed = reversed * 10 + n % 10;
        n /= 10;
    }
    reversed
}
