//! The generic value reader: recursive composition of the readers, the
//! recognizer, and the walkers into [`Value`] trees.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::buffer::Buffer;
use crate::error::Error;
use crate::handlers::{
    handle_array_values, handle_object_values, ArrayValueHandler, ObjectValueHandler,
};
use crate::readers::{read_bool, read_float64, read_null, read_string_bytes};
use crate::skip::MAX_DEPTH;
use crate::token::{next_token_type, TokenType};
use crate::unescape::unescape_string_content;
use crate::value::{Array, Map, Value};

/// A reusable reader for complex json data types (objects and arrays).
///
/// A `ValueReader` keeps its scratch stack, its string buffers, and a pool
/// of child readers alive between calls, so steady-state reads allocate
/// only the containers of the result itself. It also remembers the widest
/// object and longest array it has produced and uses them as capacity
/// hints for new containers, which pays off on streams of similarly-shaped
/// documents.
///
/// Not for concurrent use; give each worker its own reader.
///
/// ```
/// use jsonscan::{Value, ValueReader};
///
/// let mut reader = ValueReader::new();
/// let (val, p) = reader.read_value(br#"[1,2,3]"#).unwrap();
/// assert_eq!(val, Value::Array(vec![1.0.into(), 2.0.into(), 3.0.into()]));
/// assert_eq!(p, 7);
/// ```
#[derive(Debug, Default)]
pub struct ValueReader {
    buf: Buffer,
    pool: Vec<Box<ValueReader>>,
    obj_val: Map,
    arr_val: Array,
    field_name_buf: Vec<u8>,
    string_buf: Vec<u8>,
    depth: usize,

    new_map_size: usize,
    last_map_size: usize,
    max_map_size: usize,
    last_slice_size: usize,
}

impl ValueReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn borrow_child(&mut self) -> Box<ValueReader> {
        let mut child = self.pool.pop().unwrap_or_default();
        child.depth = self.depth + 1;
        child.new_map_size = 0;
        child
    }

    fn return_child(&mut self, mut child: Box<ValueReader>) {
        child.arr_val.clear();
        self.pool.push(child);
    }

    /// Reads a value at the beginning of `data`. The result mirrors the
    /// json data type: object, array, string, number, boolean, or null.
    pub fn read_value(&mut self, data: &[u8]) -> Result<(Value, usize), Error> {
        let (tkn, mut p) = next_token_type(data)?;
        p -= 1;
        let (val, pp) = self.read_nested(&data[p..], tkn)?;
        Ok((val, p + pp))
    }

    /// Reads an object at the beginning of `data` into a [`Map`].
    ///
    /// `null` is not an object: it fails with [`Error::InvalidObject`].
    pub fn read_object(&mut self, data: &[u8]) -> Result<(Map, usize), Error> {
        let top_level = self.depth == 0;
        if top_level {
            self.depth = 1;
        }
        let result = self.read_object_inner(data);
        if top_level {
            self.depth = 0;
        }
        result
    }

    fn read_object_inner(&mut self, data: &[u8]) -> Result<(Map, usize), Error> {
        let mut map_size = self.new_map_size;
        if map_size == 0 {
            map_size = self.last_map_size;
        }
        self.obj_val = Map::with_capacity(map_size);
        let mut buf = core::mem::take(&mut self.buf);
        let walked = handle_object_values(data, self, Some(&mut buf));
        self.buf = buf;
        let p = walked?;
        let val = core::mem::take(&mut self.obj_val);
        self.last_map_size = val.len();
        Ok((val, p))
    }

    /// Reads an array at the beginning of `data` into an [`Array`].
    ///
    /// `null` is not an array: it fails with [`Error::InvalidArray`].
    pub fn read_array(&mut self, data: &[u8]) -> Result<(Array, usize), Error> {
        let top_level = self.depth == 0;
        if top_level {
            self.depth = 1;
        }
        let result = self.read_array_inner(data);
        if top_level {
            self.depth = 0;
        }
        result
    }

    fn read_array_inner(&mut self, data: &[u8]) -> Result<(Array, usize), Error> {
        self.arr_val = Array::with_capacity(self.last_slice_size);
        let mut buf = core::mem::take(&mut self.buf);
        let walked = handle_array_values(data, self, Some(&mut buf));
        self.buf = buf;
        let p = walked?;
        let val = core::mem::take(&mut self.arr_val);
        self.last_slice_size = val.len();
        Ok((val, p))
    }

    /// Reads one nested value, descending through a pooled child reader
    /// for containers.
    fn read_nested(&mut self, data: &[u8], tkn: TokenType) -> Result<(Value, usize), Error> {
        match tkn {
            TokenType::ObjectStart => {
                let mut child = self.borrow_child();
                if child.depth > MAX_DEPTH {
                    self.pool.push(child);
                    return Err(Error::MaxDepth);
                }
                child.new_map_size = self.max_map_size;
                let result = child.read_object_inner(data);
                match result {
                    Ok((map, pp)) => {
                        if map.len() > self.max_map_size {
                            self.max_map_size = map.len();
                        }
                        self.return_child(child);
                        Ok((Value::Object(map), pp))
                    }
                    Err(e) => {
                        self.return_child(child);
                        Err(e)
                    }
                }
            }
            TokenType::ArrayStart => {
                let mut child = self.borrow_child();
                if child.depth > MAX_DEPTH {
                    self.pool.push(child);
                    return Err(Error::MaxDepth);
                }
                let result = child.read_array_inner(data);
                match result {
                    Ok((arr, pp)) => {
                        self.return_child(child);
                        Ok((Value::Array(arr), pp))
                    }
                    Err(e) => {
                        self.return_child(child);
                        Err(e)
                    }
                }
            }
            other => self.read_simple_value(data, other),
        }
    }

    fn read_simple_value(&mut self, data: &[u8], tkn: TokenType) -> Result<(Value, usize), Error> {
        match tkn {
            TokenType::Null => {
                let p = read_null(data)?;
                Ok((Value::Null, p))
            }
            TokenType::String => {
                self.string_buf.clear();
                let p = read_string_bytes(data, &mut self.string_buf)?;
                let s = String::from_utf8_lossy(&self.string_buf).into_owned();
                Ok((Value::String(s), p))
            }
            TokenType::Number => {
                let (f, p) = read_float64(data)?;
                Ok((Value::Number(f), p))
            }
            TokenType::True | TokenType::False => {
                let (b, p) = read_bool(data)?;
                Ok((Value::Boolean(b), p))
            }
            _ => Err(Error::NoValidToken),
        }
    }
}

impl ObjectValueHandler for ValueReader {
    fn handle_object_value(&mut self, fieldname: &[u8], data: &[u8]) -> Result<usize, Error> {
        let name = if fieldname.contains(&b'\\') {
            self.field_name_buf.clear();
            unescape_string_content(fieldname, &mut self.field_name_buf)?;
            String::from_utf8_lossy(&self.field_name_buf).into_owned()
        } else {
            String::from_utf8_lossy(fieldname).into_owned()
        };
        let (tkn, mut p) = next_token_type(data)?;
        p -= 1;
        let (val, pp) = self.read_nested(&data[p..], tkn)?;
        self.obj_val.insert(name, val);
        Ok(p + pp)
    }
}

impl ArrayValueHandler for ValueReader {
    fn handle_array_value(&mut self, data: &[u8]) -> Result<usize, Error> {
        let (tkn, mut p) = next_token_type(data)?;
        p -= 1;
        let (val, pp) = self.read_nested(&data[p..], tkn)?;
        self.arr_val.push(val);
        Ok(p + pp)
    }
}

/// Reads a value with a throwaway [`ValueReader`]. Prefer keeping a reader
/// around when parsing more than one document.
pub fn read_value(data: &[u8]) -> Result<(Value, usize), Error> {
    ValueReader::new().read_value(data)
}

/// Reads an object with a throwaway [`ValueReader`].
pub fn read_object(data: &[u8]) -> Result<(Map, usize), Error> {
    ValueReader::new().read_object(data)
}

/// Reads an array with a throwaway [`ValueReader`].
pub fn read_array(data: &[u8]) -> Result<(Array, usize), Error> {
    ValueReader::new().read_array(data)
}
