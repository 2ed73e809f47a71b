//! Primitive readers: one JSON value from the front of a byte slice.
//!
//! Every reader skips leading whitespace, reads exactly one value, and
//! returns it together with the advance — the index of the first byte
//! after the value. None of them skip trailing whitespace, so readers can
//! be chained by the caller or driven from walker callbacks.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::numbers::parse_float_prefix;
use crate::unescape::{append_remainder_of_string, count_whitespace, WHITESPACE};

/// Reads a u64 at the beginning of `data`.
///
/// A lone `0` is accepted; a leading zero followed by another digit, `.`,
/// `e`, or `E` is not, and neither is a fraction or exponent after any
/// digit run (use [`read_float64`] for those). Values above `u64::MAX`
/// fail with [`Error::OutOfRange`].
pub fn read_uint64(data: &[u8]) -> Result<(u64, usize), Error> {
    let mut p = count_whitespace(data);
    if p == data.len() {
        return Err(Error::InvalidUint);
    }
    if data[p] == b'0' {
        p += 1;
        return match data.get(p) {
            Some(b'0'..=b'9' | b'.' | b'e' | b'E') => Err(Error::InvalidUint),
            _ => Ok((0, p)),
        };
    }
    let start = p;
    let mut val: u64 = 0;
    while let Some(&c @ b'0'..=b'9') = data.get(p) {
        val = val
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(c - b'0')))
            .ok_or(Error::OutOfRange)?;
        p += 1;
    }
    if p == start {
        return Err(Error::InvalidUint);
    }
    match data.get(p) {
        Some(b'.' | b'e' | b'E') => Err(Error::InvalidUint),
        _ => Ok((val, p)),
    }
}

/// Reads a u32 at the beginning of `data`.
pub fn read_uint32(data: &[u8]) -> Result<(u32, usize), Error> {
    let (val, p) = read_uint64(data)?;
    let val = u32::try_from(val).map_err(|_| Error::OutOfRange)?;
    Ok((val, p))
}

/// Reads an i64 at the beginning of `data`.
///
/// An optional leading `-` must be followed directly by a digit; a bare
/// sign is [`Error::InvalidInt`]. Magnitudes outside the i64 range fail
/// with [`Error::OutOfRange`].
pub fn read_int64(data: &[u8]) -> Result<(i64, usize), Error> {
    const CUTOFF: u64 = 1 << 63;
    let mut p = count_whitespace(data);
    if p == data.len() {
        return Err(Error::InvalidInt);
    }
    let neg = data[p] == b'-';
    if neg {
        p += 1;
        if p == data.len() || WHITESPACE[data[p] as usize] {
            return Err(Error::InvalidInt);
        }
    }
    let (val, pp) = read_uint64(&data[p..]).map_err(|e| match e {
        Error::InvalidUint => Error::InvalidInt,
        other => other,
    })?;
    p += pp;
    if neg {
        if val > CUTOFF {
            return Err(Error::OutOfRange);
        }
        Ok((val.wrapping_neg() as i64, p))
    } else {
        if val >= CUTOFF {
            return Err(Error::OutOfRange);
        }
        Ok((val as i64, p))
    }
}

/// Reads an i32 at the beginning of `data`.
pub fn read_int32(data: &[u8]) -> Result<(i32, usize), Error> {
    let (val, p) = read_int64(data)?;
    let val = i32::try_from(val).map_err(|_| Error::OutOfRange)?;
    Ok((val, p))
}

/// Reads a platform-width signed integer at the beginning of `data`.
#[cfg(target_pointer_width = "64")]
pub fn read_int(data: &[u8]) -> Result<(isize, usize), Error> {
    let (val, p) = read_int64(data)?;
    Ok((val as isize, p))
}

/// Reads a platform-width signed integer at the beginning of `data`.
#[cfg(not(target_pointer_width = "64"))]
pub fn read_int(data: &[u8]) -> Result<(isize, usize), Error> {
    let (val, p) = read_int32(data)?;
    Ok((val as isize, p))
}

/// Reads a platform-width unsigned integer at the beginning of `data`.
#[cfg(target_pointer_width = "64")]
pub fn read_uint(data: &[u8]) -> Result<(usize, usize), Error> {
    let (val, p) = read_uint64(data)?;
    Ok((val as usize, p))
}

/// Reads a platform-width unsigned integer at the beginning of `data`.
#[cfg(not(target_pointer_width = "64"))]
pub fn read_uint(data: &[u8]) -> Result<(usize, usize), Error> {
    let (val, p) = read_uint32(data)?;
    Ok((val as usize, p))
}

/// Reads an f64 at the beginning of `data`.
///
/// Accepts any syntactically valid JSON number. Magnitudes beyond the
/// finite f64 range fail with [`Error::OutOfRange`]; underflow quietly
/// becomes zero.
pub fn read_float64(data: &[u8]) -> Result<(f64, usize), Error> {
    let p = count_whitespace(data);
    if p == data.len() {
        return Err(Error::InvalidNumber);
    }
    let (val, pp) = parse_float_prefix(&data[p..])?;
    Ok((val, p + pp))
}

/// Reads a string at the beginning of `data`, appending the decoded bytes
/// to `dst`.
///
/// Escape-free content is copied with a single append and no intermediate
/// allocation. The decoded bytes are not checked for UTF-8 validity; use
/// [`read_string`] or [`std_lib_compatible_bytes`](crate::std_lib_compatible_bytes)
/// when that matters.
pub fn read_string_bytes(data: &[u8], dst: &mut Vec<u8>) -> Result<usize, Error> {
    let mut p = count_whitespace(data);
    if data.get(p) != Some(&b'"') {
        return Err(Error::InvalidString);
    }
    p += 1;
    let start = p;
    while p < data.len() {
        match data[p] {
            b'"' => {
                dst.extend_from_slice(&data[start..p]);
                return Ok(p + 1);
            }
            b if b == b'\\' || b <= 0x1F => {
                dst.extend_from_slice(&data[start..p]);
                let pp = append_remainder_of_string(&data[p..], dst)?;
                return Ok(p + pp);
            }
            _ => p += 1,
        }
    }
    Err(Error::InvalidString)
}

/// Reads a string at the beginning of `data`.
///
/// Invalid UTF-8 in the decoded content is replaced with U+FFFD. `buf` is
/// an optional working buffer for the escape path; pass the same one
/// across calls to avoid reallocation. For full zero-copy control use
/// [`read_string_bytes`].
pub fn read_string(data: &[u8], buf: Option<&mut Vec<u8>>) -> Result<(String, usize), Error> {
    let mut p = count_whitespace(data);
    if data.get(p) != Some(&b'"') {
        return Err(Error::InvalidString);
    }
    p += 1;
    let start = p;
    while p < data.len() {
        match data[p] {
            b'"' => {
                let val = String::from_utf8_lossy(&data[start..p]).into_owned();
                return Ok((val, p + 1));
            }
            b if b == b'\\' || b <= 0x1F => break,
            _ => p += 1,
        }
    }
    if p == data.len() {
        return Err(Error::InvalidString);
    }
    let mut local = Vec::new();
    let work = match buf {
        Some(b) => {
            b.clear();
            b
        }
        None => &mut local,
    };
    work.extend_from_slice(&data[start..p]);
    let pp = append_remainder_of_string(&data[p..], work)?;
    Ok((String::from_utf8_lossy(work).into_owned(), p + pp))
}

/// Reads `true` or `false` at the beginning of `data`.
pub fn read_bool(data: &[u8]) -> Result<(bool, usize), Error> {
    let p = count_whitespace(data);
    let rest = &data[p..];
    if rest.starts_with(b"true") {
        Ok((true, p + 4))
    } else if rest.starts_with(b"false") {
        Ok((false, p + 5))
    } else {
        Err(Error::NotBool)
    }
}

/// Reads `null` at the beginning of `data`, returning the position just
/// past it.
pub fn read_null(data: &[u8]) -> Result<usize, Error> {
    let p = count_whitespace(data);
    if data[p..].starts_with(b"null") {
        Ok(p + 4)
    } else {
        Err(Error::NotNull)
    }
}
