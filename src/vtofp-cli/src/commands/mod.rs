//! Command handlers for vtofp CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod plan;
