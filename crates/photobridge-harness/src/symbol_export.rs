//! File pipeline for the version-script generator.
//!
//! Thin wrapper over the pure transform in `photobridge-core` so the CLI
//! entry point stays declarative. Failures stop the pipeline with no
//! partial output: a half-written export list is worse than none.

use std::path::Path;

use thiserror::Error;

use photobridge_core::version_script::{
    SymbolListError, generate_version_script, parse_symbol_lines,
};

#[derive(Debug, Error)]
pub enum SymbolExportError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Symbols(#[from] SymbolListError),
}

/// Read a symbol list from `input`, write the version-script to `output`.
///
/// Returns the number of exported symbols on success.
pub fn write_version_script(input: &Path, output: &Path) -> Result<usize, SymbolExportError> {
    let raw = std::fs::read_to_string(input)?;
    let symbols = parse_symbol_lines(&raw)?;
    let script = generate_version_script(&symbols);
    std::fs::write(output, script)?;
    Ok(symbols.len())
}
