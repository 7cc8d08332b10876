// src/sum_to_n.rs

//! Three ways to compute the sum of the integers 1..=n.
//!
//! Unrelated to the product service; kept as a standalone exercise with the
//! original complexity commentary attached to each variant.

/// Closed-form `n * (n + 1) / 2`.
///
/// Time O(1), space O(1). Exact only while `n * (n + 1)` fits in `u64`;
/// past that the multiplication overflows (panics in debug builds, wraps in
/// release).
pub fn sum_to_n_closed_form(n: u64) -> u64 {
  n * (n + 1) / 2
}

/// Iterative accumulation.
///
/// Time O(n), space O(1). Simple and predictable, but linear in `n`, so the
/// closed form wins for large inputs.
pub fn sum_to_n_iterative(n: u64) -> u64 {
  let mut sum = 0;
  for i in 1..=n {
    sum += i;
  }
  sum
}

/// Recursion down to the base case `n == 1`.
///
/// Time O(n), space O(n) call stack, so large `n` risks exhausting the
/// stack. Known boundary defect carried over from the original: there is no
/// base case for `n == 0`, so the `n - 1` step underflows instead of
/// returning a value (a panic under debug overflow checks).
pub fn sum_to_n_recursive(n: u64) -> u64 {
  if n == 1 {
    return 1;
  }
  n + sum_to_n_recursive(n - 1)
}
