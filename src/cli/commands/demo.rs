//! Default command: the factorial/calculator demonstration.

use std::io::Write;

use crate::math::{Calculator, factorial};

/// Print `Factorial of 5 is: 120` then `Result: 30`.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!("running demonstration");

    writeln!(out, "Factorial of 5 is: {}", factorial(5)?)?;

    let calc = Calculator::new();
    let res = calc.add(10, 20);
    writeln!(out, "Result: {res}")?;

    Ok(())
}
