//! `solidforge` command-line runner.
//!
//! Each subcommand runs one example and returns its output lines; the binary
//! only prints them.

pub mod cli;
pub mod demos;

pub use cli::{Cli, Command};
