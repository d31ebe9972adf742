//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Factorial and calculator demonstration
#[derive(Parser, Debug)]
#[command(
    name = "arithkit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Factorial and calculator demonstration",
    long_about = "Runs the factorial/calculator demonstration when called without a command.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true, env = "ARITHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Compute the factorial of N
    Factorial {
        /// Input value; anything <= 1 yields 1
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Add two integers
    Add {
        /// Left operand
        #[arg(allow_negative_numbers = true)]
        a: i64,

        /// Right operand
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Display active settings
    Config,
}
