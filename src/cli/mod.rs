//! Command-line interface module
//!
//! Provides argument parsing and action execution.

pub mod args;
pub mod commands;

pub use args::{Args, parse_args};
pub use commands::execute_command;
