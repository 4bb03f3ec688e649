//! # photobridge-core
//!
//! Safe core logic for the photobridge glue layer.
//!
//! This crate holds everything that does not touch native memory: the
//! version-query model (verbosity and library-target sum types) and the
//! linker version-script generator. No `unsafe` code is permitted at the
//! crate level; the raw boundary lives in `photobridge-ffi`.

#![deny(unsafe_code)]

pub mod verbosity;
pub mod version_script;

pub use verbosity::{LibraryTarget, VersionVerbosity};
pub use version_script::{SymbolListError, generate_version_script, parse_symbol_lines};
