use std::ops::Add;

use super::error::{MathError, MathResult};

/// A calculator holding a `result` field.
///
/// `result` starts at zero and is not touched by [`Calculator::add`] or
/// [`Calculator::checked_add`]; both return the sum to the caller instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    result: i64,
}

impl Calculator {
    /// Create a calculator with `result = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored at construction.
    pub fn result(&self) -> i64 {
        self.result
    }

    /// Return `a + b`.
    ///
    /// Works for any operand type with an `Add` impl; overflow follows that
    /// type's own rules.
    pub fn add<T: Add<Output = T>>(&self, a: T, b: T) -> T {
        a + b
    }

    /// Overflow-checked addition of two `i64` values.
    ///
    /// # Errors
    /// Returns [`MathError::AdditionOverflow`] if the sum does not fit in `i64`.
    pub fn checked_add(&self, a: i64, b: i64) -> MathResult<i64> {
        a.checked_add(b).ok_or_else(|| {
            tracing::debug!("addition overflow: {a} + {b}");
            MathError::AdditionOverflow { a, b }
        })
    }
}
