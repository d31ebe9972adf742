use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Factorial of {n} does not fit in 128 bits (largest supported input is 34)")]
    FactorialOverflow { n: i64 },

    #[error("Addition overflow: {a} + {b} does not fit in a 64-bit integer")]
    AdditionOverflow { a: i64, b: i64 },
}

pub type MathResult<T> = Result<T, MathError>;
