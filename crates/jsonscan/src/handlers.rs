//! Streaming walkers over object members and array elements.
//!
//! Both walkers iterate one nesting level, handing each member to a
//! caller-supplied single-method handler together with a slice that starts
//! at the first byte of the value and runs to the end of the input. The
//! handler reports how much of that slice it consumed:
//!
//! - `Ok(0)` — "skip this one for me": the walker skips the value with the
//!   strict recognizer and moves on.
//! - `Ok(n)` — the handler consumed `n` bytes; the walker trusts it and
//!   resumes just after. Consuming less than the whole value corrupts the
//!   walk — that is a caller bug, not a recoverable state.
//! - `Err(e)` — the walk stops and `e` is returned verbatim. Returning
//!   [`Error::Stop`] (or any agreed-upon sentinel) is the idiomatic way to
//!   stop early once a handler has seen everything it wanted.
//!
//! Object field names are passed as the raw bytes between the key's
//! quotes. Escapes are validated but not decoded, which keeps matching
//! against literal ASCII keys zero-copy; handlers that need the decoded
//! name run [`unescape_string_content`](crate::unescape_string_content)
//! themselves.

use crate::buffer::Buffer;
use crate::error::Error;
use crate::skip::{scan_string_strict, skip_value};
use crate::unescape::count_whitespace;

/// A handler for json object members.
pub trait ObjectValueHandler {
    /// Called once per member with the raw field name and a slice starting
    /// at the member's value.
    fn handle_object_value(&mut self, fieldname: &[u8], data: &[u8]) -> Result<usize, Error>;
}

impl<F> ObjectValueHandler for F
where
    F: FnMut(&[u8], &[u8]) -> Result<usize, Error>,
{
    fn handle_object_value(&mut self, fieldname: &[u8], data: &[u8]) -> Result<usize, Error> {
        self(fieldname, data)
    }
}

/// A handler for values in a json array.
pub trait ArrayValueHandler {
    /// Called once per element with a slice starting at the element.
    fn handle_array_value(&mut self, data: &[u8]) -> Result<usize, Error>;
}

impl<F> ArrayValueHandler for F
where
    F: FnMut(&[u8]) -> Result<usize, Error>,
{
    fn handle_array_value(&mut self, data: &[u8]) -> Result<usize, Error> {
        self(data)
    }
}

/// Runs `handler` on each member of the object at the beginning of `data`
/// until the object ends or the handler returns an error.
///
/// On success the returned position is just past the object's closing
/// `}`. Members are delivered in source order; keys that appear more than
/// once are delivered more than once. `buffer` is optional; reusing one
/// avoids reallocating the nesting stack used to skip declined values.
pub fn handle_object_values<H>(
    data: &[u8],
    handler: &mut H,
    buffer: Option<&mut Buffer>,
) -> Result<usize, Error>
where
    H: ObjectValueHandler + ?Sized,
{
    let mut local = Buffer::new();
    let buf = match buffer {
        Some(b) => b,
        None => &mut local,
    };

    let mut p = count_whitespace(data);
    if p == data.len() {
        return Err(Error::UnexpectedEof);
    }
    if data[p] != b'{' {
        return Err(Error::InvalidObject);
    }
    p += 1;
    p += count_whitespace(&data[p..]);
    match data.get(p) {
        Some(b'}') => return Ok(p + 1),
        Some(b'"') => {}
        Some(_) => return Err(Error::InvalidObject),
        None => return Err(Error::UnexpectedEof),
    }

    loop {
        let key_end = scan_string_strict(data, p)?;
        let fieldname = &data[p + 1..key_end - 1];
        p = key_end;
        p += count_whitespace(&data[p..]);
        match data.get(p) {
            Some(b':') => p += 1,
            Some(_) => return Err(Error::InvalidObject),
            None => return Err(Error::UnexpectedEof),
        }
        p += count_whitespace(&data[p..]);
        if p == data.len() {
            return Err(Error::UnexpectedEof);
        }

        let advanced = handler.handle_object_value(fieldname, &data[p..])?;
        if advanced == 0 {
            p += skip_value(&data[p..], Some(&mut *buf))?;
        } else {
            p += advanced;
        }

        p += count_whitespace(&data[p..]);
        match data.get(p) {
            Some(b',') => {
                p += 1;
                p += count_whitespace(&data[p..]);
                match data.get(p) {
                    Some(b'"') => {}
                    Some(_) => return Err(Error::InvalidObject),
                    None => return Err(Error::UnexpectedEof),
                }
            }
            Some(b'}') => return Ok(p + 1),
            Some(_) => return Err(Error::InvalidObject),
            None => return Err(Error::UnexpectedEof),
        }
    }
}

/// Runs `handler` on each element of the array at the beginning of `data`
/// until the array ends or the handler returns an error.
///
/// On success the returned position is just past the array's closing `]`.
pub fn handle_array_values<H>(
    data: &[u8],
    handler: &mut H,
    buffer: Option<&mut Buffer>,
) -> Result<usize, Error>
where
    H: ArrayValueHandler + ?Sized,
{
    let mut local = Buffer::new();
    let buf = match buffer {
        Some(b) => b,
        None => &mut local,
    };

    let mut p = count_whitespace(data);
    if p == data.len() {
        return Err(Error::UnexpectedEof);
    }
    if data[p] != b'[' {
        return Err(Error::InvalidArray);
    }
    p += 1;
    p += count_whitespace(&data[p..]);
    if data.get(p) == Some(&b']') {
        return Ok(p + 1);
    }
    if p == data.len() {
        return Err(Error::UnexpectedEof);
    }

    loop {
        let advanced = handler.handle_array_value(&data[p..])?;
        if advanced == 0 {
            p += skip_value(&data[p..], Some(&mut *buf))?;
        } else {
            p += advanced;
        }

        p += count_whitespace(&data[p..]);
        match data.get(p) {
            Some(b',') => {
                p += 1;
                p += count_whitespace(&data[p..]);
                if p == data.len() {
                    return Err(Error::UnexpectedEof);
                }
            }
            Some(b']') => return Ok(p + 1),
            Some(_) => return Err(Error::InvalidArray),
            None => return Err(Error::UnexpectedEof),
        }
    }
}
