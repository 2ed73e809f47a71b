//! Lossy UTF-8 helpers matching the behavior of validating decoders.
//!
//! The byte-level readers pass string content through untouched, so JSON
//! documents carrying invalid UTF-8 inside strings survive a round trip
//! through [`read_string_bytes`](crate::read_string_bytes). Decoders that
//! insist on valid text replace the offending bytes with U+FFFD; these
//! helpers apply the same replacement.

use alloc::string::String;
use alloc::vec::Vec;

/// Returns `bytes` as text, replacing invalid UTF-8 sequences with U+FFFD.
#[must_use]
pub fn std_lib_compatible_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Appends `bytes` to `buf`, replacing invalid UTF-8 sequences with U+FFFD.
pub fn std_lib_compatible_bytes(bytes: &[u8], buf: &mut Vec<u8>) {
    match core::str::from_utf8(bytes) {
        Ok(s) => buf.extend_from_slice(s.as_bytes()),
        Err(_) => buf.extend_from_slice(String::from_utf8_lossy(bytes).as_bytes()),
    }
}
