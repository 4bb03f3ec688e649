//! Runtime version report across both native modules.
//!
//! Collects one decoded version array per module through a single
//! `CameraLibraries` handle. The primary machine artifact is JSON; the
//! plain render keeps the short-table and verbose-bullet layouts the
//! native tooling has always printed.

use serde::Serialize;

use photobridge_core::{LibraryTarget, VersionVerbosity};
use photobridge_ffi::{CameraLibraries, VersionQueryError};

/// One module's decoded version array. By convention the first entry is
/// the version string and the rest are feature entries.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleVersion {
    pub module: String,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionReport {
    pub verbosity: VersionVerbosity,
    pub modules: Vec<ModuleVersion>,
}

impl VersionReport {
    /// Query both targets at the given verbosity.
    ///
    /// Any native-call or decode failure aborts the whole report; there is
    /// no partial output mode.
    pub fn collect(
        libraries: &CameraLibraries,
        verbosity: VersionVerbosity,
    ) -> Result<Self, VersionQueryError> {
        let mut modules = Vec::new();
        for target in LibraryTarget::ALL {
            let entries = libraries.query_version(target, verbosity)?;
            modules.push(ModuleVersion {
                module: target.to_string(),
                entries,
            });
        }
        Ok(Self { verbosity, modules })
    }

    /// Stable human-readable render.
    ///
    /// Modules with an empty version array are listed in the report data
    /// but skipped in the render, matching the native print tooling.
    #[must_use]
    pub fn render_plain(&self) -> String {
        use std::fmt::Write as _;

        let mut out = String::new();
        match self.verbosity {
            VersionVerbosity::Short => {
                writeln!(
                    out,
                    "Short runtime version information on the libgphoto2 build:"
                )
                .ok();
                for module in &self.modules {
                    let Some((version, features)) = module.entries.split_first() else {
                        continue;
                    };
                    writeln!(
                        out,
                        "  {:<15} {:<14} {}",
                        module.module,
                        version,
                        features.join(", ")
                    )
                    .ok();
                }
            }
            VersionVerbosity::Verbose => {
                writeln!(
                    out,
                    "Verbose runtime version information on the libgphoto2 build:"
                )
                .ok();
                for module in &self.modules {
                    let Some((version, features)) = module.entries.split_first() else {
                        continue;
                    };
                    writeln!(out, "  * {} {}", module.module, version).ok();
                    for feature in features {
                        writeln!(out, "      * {feature}").ok();
                    }
                }
            }
        }
        out
    }
}
