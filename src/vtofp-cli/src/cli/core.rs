//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::plan::{FormulaArgs, OutputFormat};

#[derive(Parser)]
#[command(name = "vtofp")]
#[command(about = "VTOL VR Flight Plan Generator", long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a flight plan from a mission (.vts/.vtsb) and map (.vtm/.vtmb)
    #[command(visible_alias = "p")]
    Plan {
        /// Path to the mission file
        mission: PathBuf,

        /// Path to the map file
        map: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Output file (uses stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        formula: FormulaArgs,
    },

    /// Decode a mission, map or image file (stdin if no path given)
    #[command(visible_alias = "d")]
    Decode {
        /// Path to input file
        input: Option<PathBuf>,

        /// Output file (uses stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit raw bytes instead of text (for .pngb images)
        #[arg(long)]
        raw: bool,

        #[command(flatten)]
        formula: FormulaArgs,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default formula offset (A)
        #[arg(long, allow_hyphen_values = true)]
        formula_a: Option<i64>,

        /// Set default formula modulus (B)
        #[arg(long)]
        formula_b: Option<i64>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
