//! CLI argument definitions for vtofp
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod plan;

pub use core::{Cli, Commands};
pub use plan::{FormulaArgs, OutputFormat};
