//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up vtofp CLI defaults.

use crate::config::Config;
use anyhow::{bail, Result};

/// Handle the configure command
///
/// # Arguments
/// * `formula_a` - Optional decode offset to set as default
/// * `formula_b` - Optional decode modulus to set as default
/// * `show` - If true, show current configuration
pub fn handle(formula_a: Option<i64>, formula_b: Option<i64>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if formula_a.is_none() && formula_b.is_none() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, formula_a, formula_b)?;
    config.save()?;

    println!("Decode formula configured");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Update the stored constants, rejecting an unusable modulus
fn apply(config: &mut Config, formula_a: Option<i64>, formula_b: Option<i64>) -> Result<()> {
    if let Some(b) = formula_b {
        if b <= 0 {
            bail!("Formula modulus must be positive, got {}", b);
        }
        config.formula_b = Some(b);
    }
    if let Some(a) = formula_a {
        config.formula_a = Some(a);
    }
    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match config.formula_a {
        Some(a) => println!("Formula A: {}", a),
        None => println!("Formula A: not configured"),
    }
    match config.formula_b {
        Some(b) => println!("Formula B: {}", b),
        None => println!("Formula B: not configured"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: vtofp configure --formula-a A --formula-b B");
    println!("   or: vtofp configure --show");
    println!();
    println!("Note: obfuscated .vtsb/.vtmb files decode as (byte - A) mod B.");
    println!("      VTOFP_FORMULA_A / VTOFP_FORMULA_B override the stored values.");
}
