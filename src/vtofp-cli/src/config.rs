//! Configuration management for vtofp CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::FormulaArgs;

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub formula_a: Option<i64>,
    pub formula_b: Option<i64>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("vtofp");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Merge explicit overrides over the stored values and validate them
    pub fn resolve(&self, overrides: &FormulaArgs) -> Result<vtofp::FormulaConstants> {
        let a = overrides.a.or(self.formula_a).context(
            "Formula offset not set. Pass --formula-a, set VTOFP_FORMULA_A, or run 'vtofp configure --formula-a N'.",
        )?;
        let b = overrides.b.or(self.formula_b).context(
            "Formula modulus not set. Pass --formula-b, set VTOFP_FORMULA_B, or run 'vtofp configure --formula-b N'.",
        )?;

        vtofp::FormulaConstants::new(a, b).context("Invalid decode formula")
    }
}

/// Resolve decode constants from arguments, environment and the config file
pub fn formula_constants(overrides: &FormulaArgs) -> Result<vtofp::FormulaConstants> {
    Config::load()?.resolve(overrides)
}
