//! Null-tolerant variants of the primitive readers.
//!
//! Each `decode_*` reads the same value as its `read_*` counterpart, but a
//! JSON `null` at the same position leaves the target untouched and
//! reports success, advancing past the literal. This matches how absent
//! optional fields are usually decoded from walker callbacks.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::readers::{
    read_bool, read_float64, read_int, read_int32, read_int64, read_null, read_string,
    read_uint, read_uint32, read_uint64,
};

/// Tries to read `null` at `data`; reports `orig` if that fails too.
fn null_or_bust(data: &[u8], orig: Error) -> Result<usize, Error> {
    read_null(data).map_err(|_| orig)
}

/// Reads a bool into `v`. `null` leaves `v` untouched.
pub fn decode_bool(data: &[u8], v: &mut bool) -> Result<usize, Error> {
    match read_bool(data) {
        Ok((val, p)) => {
            *v = val;
            Ok(p)
        }
        Err(e) => null_or_bust(data, e),
    }
}

/// Reads an f64 into `v`. `null` leaves `v` untouched.
pub fn decode_float64(data: &[u8], v: &mut f64) -> Result<usize, Error> {
    match read_float64(data) {
        Ok((val, p)) => {
            *v = val;
            Ok(p)
        }
        Err(e) => null_or_bust(data, e),
    }
}

/// Reads an i64 into `v`. `null` leaves `v` untouched.
pub fn decode_int64(data: &[u8], v: &mut i64) -> Result<usize, Error> {
    match read_int64(data) {
        Ok((val, p)) => {
            *v = val;
            Ok(p)
        }
        Err(e) => null_or_bust(data, e),
    }
}

/// Reads an i32 into `v`. `null` leaves `v` untouched.
pub fn decode_int32(data: &[u8], v: &mut i32) -> Result<usize, Error> {
    match read_int32(data) {
        Ok((val, p)) => {
            *v = val;
            Ok(p)
        }
        Err(e) => null_or_bust(data, e),
    }
}

/// Reads a platform-width signed integer into `v`. `null` leaves `v`
/// untouched.
pub fn decode_int(data: &[u8], v: &mut isize) -> Result<usize, Error> {
    match read_int(data) {
        Ok((val, p)) => {
            *v = val;
            Ok(p)
        }
        Err(e) => null_or_bust(data, e),
    }
}

/// Reads a u64 into `v`. `null` leaves `v` untouched.
pub fn decode_uint64(data: &[u8], v: &mut u64) -> Result<usize, Error> {
    match read_uint64(data) {
        Ok((val, p)) => {
            *v = val;
            Ok(p)
        }
        Err(e) => null_or_bust(data, e),
    }
}

/// Reads a u32 into `v`. `null` leaves `v` untouched.
pub fn decode_uint32(data: &[u8], v: &mut u32) -> Result<usize, Error> {
    match read_uint32(data) {
        Ok((val, p)) => {
            *v = val;
            Ok(p)
        }
        Err(e) => null_or_bust(data, e),
    }
}

/// Reads a platform-width unsigned integer into `v`. `null` leaves `v`
/// untouched.
pub fn decode_uint(data: &[u8], v: &mut usize) -> Result<usize, Error> {
    match read_uint(data) {
        Ok((val, p)) => {
            *v = val;
            Ok(p)
        }
        Err(e) => null_or_bust(data, e),
    }
}

/// Reads a string into `v`. `null` leaves `v` untouched. `buf` is an
/// optional working buffer, as in [`read_string`].
pub fn decode_string(data: &[u8], v: &mut String, buf: Option<&mut Vec<u8>>) -> Result<usize, Error> {
    match read_string(data, buf) {
        Ok((val, p)) => {
            *v = val;
            Ok(p)
        }
        Err(e) => null_or_bust(data, e),
    }
}
