//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and writes to the
//! `Write` handle it is given.

pub mod compute;
pub mod config;
pub mod demo;
