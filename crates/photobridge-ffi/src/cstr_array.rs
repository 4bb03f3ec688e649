//! Decoding of native `char **` arrays into owned string lists.
//!
//! The native convention is a contiguous block of string pointers with a
//! null pointer as the terminator instead of a length prefix. The decoder
//! walks the block under an explicit element ceiling and copies every
//! entry out before returning, so the result's lifetime is independent of
//! the native allocation.

use std::ffi::{CStr, c_char};
use std::num::NonZeroUsize;
use std::str::Utf8Error;

use thiserror::Error;

/// Raw base address of a NUL-terminated native string array.
///
/// Not owned by the caller; lifetime and mutability are controlled by the
/// native library that returned it.
pub type RawStringArray = *const *const c_char;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The array base address itself was null.
    #[error("string array base address is null")]
    InvalidAddress,
    /// `ceiling` pointers were read without finding the null terminator.
    #[error("no null terminator within {ceiling} array elements")]
    TruncatedArray { ceiling: usize },
    /// An entry's bytes were not valid UTF-8. Failing here is deliberate:
    /// a lossy substitute would mask a native-side bug.
    #[error("array element {index} is not valid UTF-8")]
    InvalidEncoding {
        index: usize,
        #[source]
        source: Utf8Error,
    },
}

/// Decode a NUL-terminated native string array into owned strings.
///
/// Pointer slots are read sequentially from `base`; a null slot terminates
/// the array successfully (an array whose first slot is null decodes to an
/// empty list). Each entry is copied out as an owned `String`, preserving
/// array order. If `max_elements` slots are read without a terminator the
/// decode fails with [`DecodeError::TruncatedArray`] and the slot past the
/// ceiling is never read.
///
/// The native memory is neither freed nor mutated. If the wrapped library
/// expects the caller to release the array, that must be layered on top of
/// this decode, not inside it.
///
/// # Safety
///
/// `base`, when non-null, must point to memory valid for reading pointer
/// slots up to the first null slot or up to `max_elements` slots, whichever
/// comes first, and every non-null slot must point to a readable
/// NUL-terminated byte string.
pub unsafe fn decode_string_array(
    base: RawStringArray,
    max_elements: NonZeroUsize,
) -> Result<Vec<String>, DecodeError> {
    if base.is_null() {
        return Err(DecodeError::InvalidAddress);
    }

    let ceiling = max_elements.get();
    let mut entries = Vec::new();
    for index in 0..ceiling {
        // SAFETY: caller guarantees slots are readable up to the terminator
        // or the ceiling, and `index < ceiling`.
        let slot = unsafe { *base.add(index) };
        if slot.is_null() {
            return Ok(entries);
        }
        // SAFETY: caller guarantees non-null slots point to NUL-terminated
        // byte strings.
        let bytes = unsafe { CStr::from_ptr(slot) };
        let text = bytes
            .to_str()
            .map_err(|source| DecodeError::InvalidEncoding { index, source })?;
        entries.push(text.to_owned());
    }

    Err(DecodeError::TruncatedArray { ceiling })
}
