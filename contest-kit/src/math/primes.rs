//! Primality testing and prime generation.

/// Check if a number is prime by trial division over odd candidates.
///
/// O(sqrt(n)); fine for one-off queries, use [`sieve`] for bulk work.
///
/// # Example
///
/// ```
/// # use contest_kit::math::is_prime;
/// assert!(is_prime(17));
/// assert!(!is_prime(1));
/// assert!(!is_prime(221)); // 13 * 17
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // Overflow-free form of i * i <= n.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Sieve of Eratosthenes: all primes up to and including `limit`, ascending.
///
/// # Example
///
/// ```
/// # use contest_kit::math::sieve;
/// assert_eq!(sieve(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert!(sieve(1).is_empty());
/// ```
pub fn sieve(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;
    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            let mut j = i * i;
            while j <= limit {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }
    (2..=limit).filter(|&n| is_prime[n]).collect()
}
