//! Factorial over signed 64-bit inputs.
//!
//! Every `n <= 1` (zero and all negatives included) yields 1. Results are
//! exact up to `34!`, the largest factorial representable as `u128`.

use super::error::{MathError, MathResult};

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Compute `n!`.
///
/// Evaluated as a running product over `2..=n`, which gives the same value as
/// the recursive definition `n * (n - 1)!` without growing the stack.
///
/// # Errors
/// Returns [`MathError::FactorialOverflow`] when `n > MAX_FACTORIAL_INPUT`.
pub fn factorial(n: i64) -> MathResult<u128> {
    if n <= 1 {
        tracing::trace!("factorial base case for n = {n}");
        return Ok(1);
    }

    let mut acc: u128 = 1;
    for k in 2..=n {
        // k is positive here
        acc = acc.checked_mul(k as u128).ok_or_else(|| {
            tracing::debug!("factorial overflow at k = {k} (n = {n})");
            MathError::FactorialOverflow { n }
        })?;
    }

    tracing::debug!("factorial({n}) = {acc}");
    Ok(acc)
}
