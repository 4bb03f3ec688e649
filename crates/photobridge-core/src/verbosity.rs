//! Version-query model — verbosity flag and library targets.
//!
//! The native entry points take the verbosity as a C `int` (0 = short,
//! 1 = verbose). Both values are modeled as a closed sum type so an invalid
//! encoding is unrepresentable on the Rust side; the native layer never
//! hands a verbosity back to us, so no reverse mapping exists.

use std::ffi::c_int;
use std::fmt;

use serde::Serialize;

/// Requested detail level for a native version query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionVerbosity {
    /// One-word feature entries after the version string.
    Short,
    /// Fuller entries with per-feature explanations.
    Verbose,
}

impl VersionVerbosity {
    /// Wire encoding passed to the native call.
    #[inline]
    pub const fn as_native(self) -> c_int {
        match self {
            Self::Short => 0,
            Self::Verbose => 1,
        }
    }
}

impl fmt::Display for VersionVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short => f.write_str("short"),
            Self::Verbose => f.write_str("verbose"),
        }
    }
}

/// The two wrapped native modules that expose a version entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryTarget {
    /// The camera-access library proper (`libgphoto2`).
    CoreLibrary,
    /// The port/transport library (`libgphoto2_port`).
    PortLibrary,
}

impl LibraryTarget {
    /// Both targets, in report order.
    pub const ALL: [Self; 2] = [Self::CoreLibrary, Self::PortLibrary];

    /// Name of the native version entry point exported by this module.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::CoreLibrary => "gp_library_version",
            Self::PortLibrary => "gp_port_library_version",
        }
    }

    /// Default shared-object name used when no explicit path is given.
    #[inline]
    pub const fn soname(self) -> &'static str {
        match self {
            Self::CoreLibrary => "libgphoto2.so",
            Self::PortLibrary => "libgphoto2_port.so",
        }
    }
}

impl fmt::Display for LibraryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoreLibrary => f.write_str("libgphoto2"),
            Self::PortLibrary => f.write_str("libgphoto2_port"),
        }
    }
}
