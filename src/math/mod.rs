//! Arithmetic core: factorial and the calculator entity.

pub mod calculator;
pub mod error;
pub mod factorial;

pub use calculator::Calculator;
pub use error::{MathError, MathResult};
pub use factorial::{MAX_FACTORIAL_INPUT, factorial};
