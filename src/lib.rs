pub mod cli;
pub mod config;
pub mod logging;
pub mod math;

pub use config::Settings;
pub use math::{Calculator, MAX_FACTORIAL_INPUT, MathError, MathResult, factorial};
