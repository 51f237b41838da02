//! # Dynamic programming snippets
//!
//! Table classics (0/1 knapsack, longest common subsequence), the
//! O(n log n) longest increasing subsequence, fewest-coins change and
//! memoized Fibonacci. Memo state is always a value owned by the caller;
//! none of these functions keep state between calls.

use crate::math::MOD;
use crate::seq::make_grid;

/// Maximum value achievable with a 0/1 choice per item under a weight cap.
///
/// `items` are `(weight, value)` pairs; each may be taken at most once.
/// Runs in O(items · capacity) time and space.
///
/// # Example
///
/// ```
/// # use contest_kit::dp::knapsack_01;
/// let items = [(2, 3), (3, 4), (4, 5)];
/// assert_eq!(knapsack_01(5, &items), 7);
/// ```
pub fn knapsack_01(capacity: usize, items: &[(usize, u64)]) -> u64 {
    let mut best = make_grid(items.len() + 1, capacity + 1, 0u64);
    for (i, &(weight, value)) in items.iter().enumerate() {
        for cap in 0..=capacity {
            best[i + 1][cap] = best[i][cap];
            if weight <= cap {
                best[i + 1][cap] = best[i + 1][cap].max(best[i][cap - weight] + value);
            }
        }
    }
    best[items.len()][capacity]
}

/// Length of the longest common subsequence of two byte strings.
///
/// # Example
///
/// ```
/// # use contest_kit::dp::lcs;
/// assert_eq!(lcs("AGGTAB", "GXTXAYB"), 4);
/// ```
pub fn lcs(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut longest = make_grid(a.len() + 1, b.len() + 1, 0usize);
    for i in 0..a.len() {
        for j in 0..b.len() {
            longest[i + 1][j + 1] = if a[i] == b[j] {
                longest[i][j] + 1
            } else {
                longest[i][j + 1].max(longest[i + 1][j])
            };
        }
    }
    longest[a.len()][b.len()]
}

/// Length of the longest strictly increasing subsequence, O(n log n).
///
/// Keeps the smallest possible tail for every subsequence length and
/// binary-searches the slot for each incoming value.
///
/// # Example
///
/// ```
/// # use contest_kit::dp::lis;
/// assert_eq!(lis(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
/// ```
pub fn lis(values: &[i64]) -> usize {
    let mut tails: Vec<i64> = Vec::new();
    for &value in values {
        let slot = tails.partition_point(|&tail| tail < value);
        if slot == tails.len() {
            tails.push(value);
        } else {
            tails[slot] = value;
        }
    }
    tails.len()
}

/// Fewest coins summing to `amount`, or `None` when no combination exists.
///
/// Coins may be reused any number of times; zero-valued coins are skipped.
///
/// # Example
///
/// ```
/// # use contest_kit::dp::coin_change;
/// assert_eq!(coin_change(&[1, 2, 5], 11), Some(3));
/// assert_eq!(coin_change(&[2], 3), None);
/// ```
pub fn coin_change(coins: &[u64], amount: u64) -> Option<u64> {
    let amount = amount as usize;
    let mut fewest: Vec<Option<u64>> = vec![None; amount + 1];
    fewest[0] = Some(0);
    for value in 1..=amount {
        for &coin in coins {
            if coin == 0 || coin > value as u64 {
                continue;
            }
            if let Some(count) = fewest[value - coin as usize] {
                let candidate = count + 1;
                fewest[value] =
                    Some(fewest[value].map_or(candidate, |current| current.min(candidate)));
            }
        }
    }
    fewest[amount]
}

/// Memo table for [`fib`], owned by the caller.
///
/// Create one per computation and drop it when done; repeated calls
/// against the same table reuse previously computed entries.
///
/// # Example
///
/// ```
/// # use contest_kit::dp::{fib, FibMemo};
/// let mut memo = FibMemo::new();
/// assert_eq!(fib(&mut memo, 10), 55);
/// assert_eq!(fib(&mut memo, 20), 6765);
/// ```
#[derive(Debug, Default)]
pub struct FibMemo {
    seen: Vec<Option<u64>>,
}

impl FibMemo {
    pub fn new() -> Self {
        Self::default()
    }
}

/// `n`-th Fibonacci number reduced modulo [`MOD`], memoized recursion.
///
/// `fib(0) = 0`, `fib(1) = 1`. Recursion depth is at most `n` and each
/// entry is computed once per memo table.
pub fn fib(memo: &mut FibMemo, n: usize) -> u64 {
    if n < 2 {
        return n as u64;
    }
    if memo.seen.len() <= n {
        memo.seen.resize(n + 1, None);
    }
    if let Some(value) = memo.seen[n] {
        return value;
    }
    let value = (fib(memo, n - 1) + fib(memo, n - 2)) % MOD;
    memo.seen[n] = Some(value);
    value
}
