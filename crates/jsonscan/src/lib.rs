//! Allocation-conscious JSON scanning and reading over byte slices.
//!
//! jsonscan does not build a document tree unless asked to. Instead it
//! exposes primitives the caller composes: advance past the next value
//! ([`skip_value`]), validate a document ([`valid`]), read a primitive at a
//! cursor ([`read_int64`], [`read_string`], ...), or walk an object/array
//! while dispatching per-member callbacks ([`handle_object_values`],
//! [`handle_array_values`]). A convenience layer builds generic [`Value`]
//! trees when the caller wants one.
//!
//! Every reader takes a `&[u8]` positioned at (or before, modulo leading
//! whitespace) the value to read, and returns the parsed value together
//! with the number of bytes consumed from the start of that slice.
//!
//! ```
//! use jsonscan::{read_int64, read_string, valid};
//!
//! let (id, _) = read_int64(b" 583231").unwrap();
//! assert_eq!(id, 583_231);
//!
//! let (name, _) = read_string(br#""octocat""#, None).unwrap();
//! assert_eq!(name, "octocat");
//!
//! assert!(valid(br#"{"login":"octocat","id":583231}"#, None));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod compat;
mod decode;
mod error;
mod handlers;
mod json_value;
mod numbers;
mod readers;
mod skip;
mod token;
mod unescape;
mod value;
mod value_reader;

pub use buffer::Buffer;
pub use compat::{std_lib_compatible_bytes, std_lib_compatible_string};
pub use decode::{
    decode_bool, decode_float64, decode_int, decode_int32, decode_int64, decode_string,
    decode_uint, decode_uint32, decode_uint64,
};
pub use error::Error;
pub use handlers::{
    handle_array_values, handle_object_values, ArrayValueHandler, ObjectValueHandler,
};
pub use json_value::{JsonValue, NumberType};
pub use readers::{
    read_bool, read_float64, read_int, read_int32, read_int64, read_null, read_string,
    read_string_bytes, read_uint, read_uint32, read_uint64,
};
pub use skip::{skip_value, skip_value_fast, valid, MAX_DEPTH};
pub use token::{next_token, next_token_type, TokenType};
pub use unescape::unescape_string_content;
pub use value::{Array, Map, Value};
pub use value_reader::{read_array, read_object, read_value, ValueReader};

#[cfg(test)]
mod tests;
