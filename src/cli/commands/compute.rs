//! Factorial and Add commands.

use std::io::Write;

use anyhow::Context;

use crate::math::{Calculator, factorial};

/// Run factorial command - print `N! = value`.
pub fn run_factorial(n: i64, out: &mut impl Write) -> anyhow::Result<()> {
    let value = factorial(n).with_context(|| format!("cannot compute {n}!"))?;
    writeln!(out, "{n}! = {value}")?;
    Ok(())
}

/// Run add command - print `A + B = sum`.
pub fn run_add(a: i64, b: i64, out: &mut impl Write) -> anyhow::Result<()> {
    let sum = Calculator::new().checked_add(a, b)?;
    writeln!(out, "{a} + {b} = {sum}")?;
    Ok(())
}
