//! Flight plan and decoding CLI definitions

use clap::Args;

/// Output format for the plan command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Printable OFP card
    #[default]
    Text,
    Json,
    Yaml,
}

/// Decode formula overrides for commands that read game files
#[derive(Args, Debug, Default)]
pub struct FormulaArgs {
    /// Decode offset (A), overrides the configured default
    #[arg(long = "formula-a", env = "VTOFP_FORMULA_A", allow_hyphen_values = true)]
    pub a: Option<i64>,

    /// Decode modulus (B), overrides the configured default
    #[arg(long = "formula-b", env = "VTOFP_FORMULA_B")]
    pub b: Option<i64>,
}
