//! I/O helpers for game files, stdin and stdout

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Read a game file, naming it in the error
pub fn read_file(path: &Path, what: &str) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {} file {}", what, path.display()))
}

/// Read bytes from a file path or stdin if path is None
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => read_file(p, "input"),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Write bytes to a file path or stdout if path is None
pub fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, data).with_context(|| format!("Failed to write {}", p.display()))?;
            tracing::info!(path = %p.display(), bytes = data.len(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(data)
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}
