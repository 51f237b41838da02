//! # Number-theory snippets
//!
//! Euclidean gcd/lcm, digit manipulation, modular arithmetic over `u64`
//! moduli and prime generation. Everything here is a standalone function
//! ready to be lifted into a solution.

pub mod helper;
pub mod modular;
pub mod primes;

pub use helper::{digit_sum, gcd, lcm, reverse_digits};
pub use modular::{MOD, binomial_mod, factorial_mod, mod_inv, mod_pow, mul_mod};
pub use primes::{is_prime, sieve};
