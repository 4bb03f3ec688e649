//! Owned handles over the native camera libraries and the typed
//! version-call invoker.
//!
//! The two shared libraries are loaded explicitly at handle construction
//! so a missing library surfaces as a recoverable error at one call site
//! instead of a process-wide load-time abort. The handle is passed to
//! every query; dropping it unloads both libraries.

use std::num::NonZeroUsize;
use std::path::Path;

use libloading::{Library, Symbol};
use thiserror::Error;

use photobridge_core::{LibraryTarget, VersionVerbosity};

use crate::cstr_array::{DecodeError, decode_string_array};

/// Shared native calling convention of both version entry points:
/// `char **gp_library_version(GPVersionVerbosity)` and
/// `char **gp_port_library_version(GPVersionVerbosity)`.
pub type VersionFn = unsafe extern "C" fn(std::ffi::c_int) -> *const *const std::ffi::c_char;

/// Safety ceiling for version arrays. The native library returns a handful
/// of feature entries; 200 bounds a corrupted or unterminated array by a
/// wide margin while staying far above any real entry count.
pub const VERSION_ARRAY_CEILING: NonZeroUsize = NonZeroUsize::new(200).unwrap();

#[derive(Debug, Error)]
pub enum VersionQueryError {
    /// The shared library or its version symbol could not be reached.
    #[error("native call unreachable: {source}")]
    NativeCallFailure {
        #[source]
        source: libloading::Error,
    },
    /// Decoder failures propagate unchanged.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Invoke a version entry point and decode its result.
///
/// This is the single reusable invoke-then-decode step: any future native
/// call returning a NUL-terminated pointer array should route through it
/// rather than re-implementing the walk per call site.
///
/// # Safety
///
/// `func` must follow the version calling convention: called with a valid
/// verbosity encoding, it must return either null or a NUL-terminated
/// array of NUL-terminated strings readable for the duration of the call.
pub unsafe fn invoke_version(
    func: VersionFn,
    verbosity: VersionVerbosity,
    max_elements: NonZeroUsize,
) -> Result<Vec<String>, VersionQueryError> {
    // SAFETY: caller contract on `func`.
    let raw = unsafe { func(verbosity.as_native()) };
    // SAFETY: the returned array obeys the caller contract above.
    let entries = unsafe { decode_string_array(raw, max_elements) }?;
    Ok(entries)
}

/// Owned handles over `libgphoto2` and `libgphoto2_port`.
#[derive(Debug)]
pub struct CameraLibraries {
    core: Library,
    port: Library,
}

impl CameraLibraries {
    /// Load both libraries by their default sonames via the system loader.
    pub fn load_default() -> Result<Self, VersionQueryError> {
        Self::load_from(
            Path::new(LibraryTarget::CoreLibrary.soname()),
            Path::new(LibraryTarget::PortLibrary.soname()),
        )
    }

    /// Load both libraries from explicit paths.
    pub fn load_from(core: &Path, port: &Path) -> Result<Self, VersionQueryError> {
        // SAFETY: loading executes the library's initialization code; the
        // camera libraries are the trusted native dependency this crate
        // exists to wrap.
        let core = unsafe { Library::new(core) }
            .map_err(|source| VersionQueryError::NativeCallFailure { source })?;
        // SAFETY: as above.
        let port = unsafe { Library::new(port) }
            .map_err(|source| VersionQueryError::NativeCallFailure { source })?;
        Ok(Self { core, port })
    }

    fn library(&self, target: LibraryTarget) -> &Library {
        match target {
            LibraryTarget::CoreLibrary => &self.core,
            LibraryTarget::PortLibrary => &self.port,
        }
    }

    /// Query one module's version array at the given verbosity.
    ///
    /// The returned list is owned and never absent; every native-call or
    /// decode failure surfaces unchanged.
    pub fn query_version(
        &self,
        target: LibraryTarget,
        verbosity: VersionVerbosity,
    ) -> Result<Vec<String>, VersionQueryError> {
        // SAFETY: the symbol is declared by the native headers with
        // exactly the `VersionFn` signature.
        let func: Symbol<'_, VersionFn> = unsafe {
            self.library(target).get(target.symbol().as_bytes())
        }
        .map_err(|source| VersionQueryError::NativeCallFailure { source })?;
        // SAFETY: the native contract guarantees a NUL-terminated array of
        // NUL-terminated strings, valid until the library is unloaded.
        unsafe { invoke_version(*func, verbosity, VERSION_ARRAY_CEILING) }
    }
}
