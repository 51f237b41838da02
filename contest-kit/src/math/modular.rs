//! Modular arithmetic over `u64` moduli.

/// The canonical contest prime modulus, 1e9 + 7.
pub const MOD: u64 = 1_000_000_007;

/// Computes `(a * b) mod modulus`.
///
/// Uses `u128` internally to prevent overflow during multiplication before
/// the modulo operation, so any `u64` modulus is safe.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// # Example
///
/// ```
/// # use contest_kit::math::mul_mod;
/// assert_eq!(mul_mod(7, 5, 10), 5);
/// assert_eq!(mul_mod(1 << 40, 1 << 40, 1 << 41), 0);
/// ```
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Computes `(base ^ exp) mod modulus` by binary exponentiation.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// # Example
///
/// ```
/// # use contest_kit::math::mod_pow;
/// assert_eq!(mod_pow(2, 10, 1000), 24);
/// assert_eq!(mod_pow(5, 0, 7), 1);
/// ```
pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result = 1;
    let mut base = base % modulus;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

/// Modular multiplicative inverse by Fermat's little theorem.
///
/// `modulus` must be prime; `None` when `a` is a multiple of it, which is
/// the only case without an inverse then.
///
/// # Example
///
/// ```
/// # use contest_kit::math::mod_inv;
/// assert_eq!(mod_inv(3, 11), Some(4)); // 3 * 4 = 12 = 1 mod 11
/// assert_eq!(mod_inv(22, 11), None);
/// ```
pub fn mod_inv(a: u64, modulus: u64) -> Option<u64> {
    if a % modulus == 0 {
        return None;
    }
    Some(mod_pow(a, modulus - 2, modulus))
}

/// Computes `n! mod modulus`.
///
/// # Example
///
/// ```
/// # use contest_kit::math::{MOD, factorial_mod};
/// assert_eq!(factorial_mod(5, MOD), 120);
/// assert_eq!(factorial_mod(0, MOD), 1);
/// ```
pub fn factorial_mod(n: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    for i in 2..=n {
        result = mul_mod(result, i, modulus);
    }
    result
}

/// Computes `n choose r` modulo a prime `modulus`, via factorials and the
/// Fermat inverse.
///
/// Valid for `n < modulus` (beyond that the denominator collapses to a
/// multiple of the modulus and `None` comes back). `r > n` is 0.
///
/// # Example
///
/// ```
/// # use contest_kit::math::{MOD, binomial_mod};
/// assert_eq!(binomial_mod(5, 2, MOD), Some(10));
/// assert_eq!(binomial_mod(5, 6, MOD), Some(0));
/// ```
pub fn binomial_mod(n: u64, r: u64, modulus: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let numerator = factorial_mod(n, modulus);
    let denominator = mul_mod(
        factorial_mod(r, modulus),
        factorial_mod(n - r, modulus),
        modulus,
    );
    let inverse = mod_inv(denominator, modulus)?;
    Some(mul_mod(numerator, inverse, modulus))
}
