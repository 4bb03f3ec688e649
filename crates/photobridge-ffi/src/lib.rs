//! # photobridge-ffi
//!
//! The unsafe boundary between scripting-facing callers and the native
//! camera libraries.
//!
//! # Architecture
//!
//! ```text
//! caller -> CameraLibraries (owned handles) -> native call -> decode_string_array -> Vec<String>
//! ```
//!
//! Every native result crosses the boundary exactly once: the raw
//! NUL-terminated pointer array is copied into owned Rust strings before
//! this crate returns, so nothing downstream ever holds a pointer into
//! native memory. Native arrays are never freed or mutated here; their
//! ownership stays with the wrapped library.

pub mod cstr_array;
pub mod library;

pub use cstr_array::{DecodeError, RawStringArray, decode_string_array};
pub use library::{
    CameraLibraries, VERSION_ARRAY_CEILING, VersionFn, VersionQueryError, invoke_version,
};
