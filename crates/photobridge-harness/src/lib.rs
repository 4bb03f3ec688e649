//! Glue tooling for the photobridge bindings.
//!
//! This crate provides:
//! - Symbol export: rewrite a flat exported-symbol list into the linker
//!   version-script consumed by the shared-library build
//! - Version report: query both native modules through one library handle
//!   and render the result for humans (plain) or machines (JSON)

#![forbid(unsafe_code)]

pub mod symbol_export;
pub mod version_report;

pub use symbol_export::{SymbolExportError, write_version_script};
pub use version_report::{ModuleVersion, VersionReport};
