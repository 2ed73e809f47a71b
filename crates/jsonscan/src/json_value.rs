//! A declarative parse tree driven by the streaming walkers.
//!
//! [`JsonValue`] describes, ahead of time, which object fields and array
//! elements a caller cares about; everything else is skipped without being
//! materialized. Setting [`JsonValue::done_err`] turns the tree into an
//! early-stopping extractor: once every declared field has been seen, the
//! sentinel is returned and the rest of the document is never scanned.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::buffer::Buffer;
use crate::compat::{std_lib_compatible_bytes, std_lib_compatible_string};
use crate::error::Error;
use crate::handlers::{
    handle_array_values, handle_object_values, ArrayValueHandler, ObjectValueHandler,
};
use crate::readers::{read_float64, read_int64, read_string_bytes, read_uint64};
use crate::skip::{skip_value, MAX_DEPTH};
use crate::token::{next_token_type, TokenType};
use crate::unescape::unescape_string_content;

/// How numeric scalars are parsed at a [`JsonValue`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberType {
    /// Parse as f64 (the default).
    #[default]
    Float,
    /// Parse as i64.
    Int,
    /// Parse as u64.
    Uint,
    /// Keep the original byte span, unparsed.
    Raw,
}

/// One node of a declarative parse tree.
///
/// Configure the public fields, then call [`parse_json`](Self::parse_json).
/// A node records the last value it matched; query it afterwards through
/// the accessors ([`string_value`](Self::string_value),
/// [`float_value`](Self::float_value), [`field_value`](Self::field_value),
/// ...). Nodes are reusable: each `parse_json` resets the tree first.
///
/// ```
/// use jsonscan::{Error, JsonValue};
///
/// let mut root = JsonValue::new();
/// root.add_field("login", JsonValue::new());
/// root.done_err = Some(Error::Stop);
///
/// let doc = br#"{"login":"octocat","id":583231}"#;
/// match root.parse_json(doc) {
///     Ok(_) | Err(Error::Stop) => {}
///     Err(e) => panic!("{e}"),
/// }
/// assert_eq!(root.field_value("login").unwrap().string_value().as_deref(), Some("octocat"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonValue {
    /// The error returned once every declared field has been seen. Leave
    /// `None` to read the whole document; set to [`Error::Stop`] (or any
    /// agreed sentinel) to short-circuit. Completion is evaluated against
    /// declared fields only — fields added through
    /// [`add_unknown_fields`](Self::add_unknown_fields) neither count
    /// toward nor extend it.
    pub done_err: Option<Error>,

    /// Declared array elements, by position. A `None` entry skips that
    /// element. See also [`append_array_values`](Self::append_array_values).
    pub array_values: Vec<Option<JsonValue>>,

    /// Declared object fields.
    pub fields: hashbrown::HashMap<String, JsonValue>,

    /// Parse elements beyond the declared ones with
    /// [`default_value`](Self::default_value) instead of stopping.
    pub append_array_values: bool,

    /// Accept and store fields not present in
    /// [`fields`](Self::fields), using [`default_value`](Self::default_value).
    pub add_unknown_fields: bool,

    /// Template for children materialized dynamically. When `None`, a
    /// child inheriting this node's configuration is used.
    pub default_value: Option<Box<JsonValue>>,

    /// How numbers are parsed at this node.
    pub number_type: NumberType,

    /// Keep object field names raw: no unescaping before matching.
    pub raw_field_names: bool,

    /// Keep string values raw: the full span, quotes included, instead of
    /// the decoded content.
    pub raw_strings: bool,

    /// Replace invalid UTF-8 in field names with U+FFFD. Ignored when
    /// [`raw_field_names`](Self::raw_field_names) is set.
    pub std_lib_compatible_fields: bool,

    /// Replace invalid UTF-8 in string values with U+FFFD. Ignored when
    /// [`raw_strings`](Self::raw_strings) is set.
    pub std_lib_compatible_strings: bool,

    buf: Buffer,
    found_field_count: usize,
    av_index: usize,
    declared: hashbrown::HashSet<String>,
    found_fields: hashbrown::HashSet<String>,
    found: bool,
    depth: usize,
    token_type: TokenType,
    string_val: Vec<u8>,
    name_buf: Vec<u8>,
    float_val: f64,
    parsed_float: bool,
    int_val: i64,
    parsed_int: bool,
    uint_val: u64,
    parsed_uint: bool,
    raw_number: Vec<u8>,
    parsed_raw: bool,
}

impl JsonValue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an object field to be parsed.
    pub fn add_field(&mut self, name: impl Into<String>, value: JsonValue) {
        self.fields.insert(name.into(), value);
    }

    /// Parses one JSON value at the beginning of `data`, filling in this
    /// node and its declared children.
    ///
    /// When [`done_err`](Self::done_err) fires, it is returned as the
    /// error of this call; compare against the sentinel to tell an early
    /// stop from a real failure.
    pub fn parse_json(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.reset();
        self.parse(data, 0, None)
    }

    fn parse(
        &mut self,
        data: &[u8],
        depth: usize,
        inherited_done: Option<Error>,
    ) -> Result<usize, Error> {
        self.depth = depth;
        let (tkn, mut p) = next_token_type(data)?;
        self.token_type = tkn;
        self.found = true;
        p -= 1;
        let value = &data[p..];
        let pp = match tkn {
            TokenType::ObjectStart => {
                if depth >= MAX_DEPTH {
                    return Err(Error::MaxDepth);
                }
                let lent_done = self.done_err.is_none() && inherited_done.is_some();
                if lent_done {
                    self.done_err = inherited_done;
                }
                let mut buf = core::mem::take(&mut self.buf);
                let walked = handle_object_values(value, self, Some(&mut buf));
                self.buf = buf;
                if lent_done {
                    self.done_err = None;
                }
                walked?
            }
            TokenType::ArrayStart => {
                if depth >= MAX_DEPTH {
                    return Err(Error::MaxDepth);
                }
                let lent_done = self.done_err.is_none() && inherited_done.is_some();
                if lent_done {
                    self.done_err = inherited_done;
                }
                let mut buf = core::mem::take(&mut self.buf);
                let walked = handle_array_values(value, self, Some(&mut buf));
                self.buf = buf;
                if lent_done {
                    self.done_err = None;
                }
                walked?
            }
            TokenType::String => {
                if self.raw_strings {
                    let pp = self.skip(value)?;
                    self.string_val.clear();
                    self.string_val.extend_from_slice(&value[..pp]);
                    pp
                } else {
                    self.string_val.clear();
                    let pp = read_string_bytes(value, &mut self.string_val)?;
                    if self.std_lib_compatible_strings {
                        let mut clean = Vec::with_capacity(self.string_val.len());
                        std_lib_compatible_bytes(&self.string_val, &mut clean);
                        self.string_val = clean;
                    }
                    pp
                }
            }
            TokenType::Number => match self.number_type {
                NumberType::Float => {
                    let (val, pp) = read_float64(value)?;
                    self.float_val = val;
                    self.parsed_float = true;
                    pp
                }
                NumberType::Int => {
                    let (val, pp) = read_int64(value)?;
                    self.int_val = val;
                    self.parsed_int = true;
                    pp
                }
                NumberType::Uint => {
                    let (val, pp) = read_uint64(value)?;
                    self.uint_val = val;
                    self.parsed_uint = true;
                    pp
                }
                NumberType::Raw => {
                    let pp = self.skip(value)?;
                    self.raw_number.clear();
                    self.raw_number.extend_from_slice(&value[..pp]);
                    self.parsed_raw = true;
                    pp
                }
            },
            _ => self.skip(value)?,
        };
        Ok(p + pp)
    }

    fn skip(&mut self, data: &[u8]) -> Result<usize, Error> {
        let mut buf = core::mem::take(&mut self.buf);
        let skipped = skip_value(data, Some(&mut buf));
        self.buf = buf;
        skipped
    }

    /// Prepares this node and its declared children to be parsed again.
    fn reset(&mut self) {
        for child in self.array_values.iter_mut().flatten() {
            child.reset();
        }
        for child in self.fields.values_mut() {
            child.reset();
        }
        self.declared.clear();
        self.declared.extend(self.fields.keys().cloned());
        self.found_fields.clear();
        self.av_index = 0;
        self.found_field_count = 0;
        self.found = false;
        self.token_type = TokenType::Invalid;
        self.string_val.clear();
        self.raw_number.clear();
        self.parsed_raw = false;
        self.parsed_int = false;
        self.parsed_float = false;
        self.parsed_uint = false;
    }

    fn prep_fieldname(&mut self, fieldname: &[u8]) -> Result<String, Error> {
        if !self.raw_field_names && fieldname.contains(&b'\\') {
            self.name_buf.clear();
            unescape_string_content(fieldname, &mut self.name_buf)?;
            return Ok(std_lib_compatible_string(&self.name_buf));
        }
        Ok(std_lib_compatible_string(fieldname))
    }

    fn make_default_child(&self) -> JsonValue {
        match &self.default_value {
            Some(template) => (**template).clone(),
            None => JsonValue {
                append_array_values: self.append_array_values,
                add_unknown_fields: self.add_unknown_fields,
                std_lib_compatible_fields: self.std_lib_compatible_fields,
                std_lib_compatible_strings: self.std_lib_compatible_strings,
                raw_field_names: self.raw_field_names,
                raw_strings: self.raw_strings,
                number_type: self.number_type,
                ..JsonValue::default()
            },
        }
    }

    /// The token type this node last matched.
    #[must_use]
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Whether this node matched anything during the last parse.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.found
    }

    /// The matched string, as raw bytes.
    #[must_use]
    pub fn string_value_bytes(&self) -> Option<&[u8]> {
        if self.found && self.token_type == TokenType::String {
            Some(&self.string_val)
        } else {
            None
        }
    }

    /// The matched string. Invalid UTF-8 is replaced with U+FFFD.
    #[must_use]
    pub fn string_value(&self) -> Option<String> {
        self.string_value_bytes().map(std_lib_compatible_string)
    }

    /// The raw number span, when [`number_type`](Self::number_type) is
    /// [`NumberType::Raw`].
    #[must_use]
    pub fn raw_number_value(&self) -> Option<&[u8]> {
        if self.found && self.parsed_raw {
            Some(&self.raw_number)
        } else {
            None
        }
    }

    /// The parsed i64, when [`number_type`](Self::number_type) is
    /// [`NumberType::Int`].
    #[must_use]
    pub fn int_value(&self) -> Option<i64> {
        if self.found && self.parsed_int {
            Some(self.int_val)
        } else {
            None
        }
    }

    /// The parsed u64, when [`number_type`](Self::number_type) is
    /// [`NumberType::Uint`].
    #[must_use]
    pub fn uint_value(&self) -> Option<u64> {
        if self.found && self.parsed_uint {
            Some(self.uint_val)
        } else {
            None
        }
    }

    /// The parsed f64, when [`number_type`](Self::number_type) is
    /// [`NumberType::Float`].
    #[must_use]
    pub fn float_value(&self) -> Option<f64> {
        if self.found && self.parsed_float {
            Some(self.float_val)
        } else {
            None
        }
    }

    /// The child node for a declared (or dynamically added) field.
    #[must_use]
    pub fn field_value(&self, name: &str) -> Option<&JsonValue> {
        self.fields.get(name)
    }

    /// The child node for an array element by position.
    #[must_use]
    pub fn array_value(&self, idx: usize) -> Option<&JsonValue> {
        self.array_values.get(idx)?.as_ref()
    }
}

impl ObjectValueHandler for JsonValue {
    fn handle_object_value(&mut self, fieldname: &[u8], data: &[u8]) -> Result<usize, Error> {
        let name = self.prep_fieldname(fieldname)?;

        if !self.fields.contains_key(name.as_str()) {
            if !self.add_unknown_fields {
                return Ok(0);
            }
            let child = self.make_default_child();
            self.fields.insert(name.clone(), child);
        }
        if self.declared.contains(name.as_str()) && self.found_fields.insert(name.clone()) {
            self.found_field_count += 1;
        }

        let complete = self.found_field_count == self.declared.len();
        let pass_done = if complete { self.done_err } else { None };
        let depth = self.depth;
        let child = self
            .fields
            .get_mut(name.as_str())
            .expect("field was just ensured");
        if child.found {
            child.reset();
        }
        let p = child.parse(data, depth + 1, pass_done)?;

        if complete {
            if let Some(done) = self.done_err {
                return Err(done);
            }
        }
        Ok(p)
    }
}

impl ArrayValueHandler for JsonValue {
    fn handle_array_value(&mut self, data: &[u8]) -> Result<usize, Error> {
        let declared_len = self.array_values.len();
        let (idx, pass_done) = if self.av_index < declared_len {
            self.av_index += 1;
            let done = if self.av_index == declared_len && !self.append_array_values {
                self.done_err
            } else {
                None
            };
            (self.av_index - 1, done)
        } else if self.append_array_values {
            let child = self.make_default_child();
            self.array_values.push(Some(child));
            self.av_index = declared_len + 1;
            (declared_len, None)
        } else {
            // Past the declared elements: stop if a sentinel is armed,
            // otherwise have the walker skip the rest one by one.
            return match self.done_err {
                Some(done) => Err(done),
                None => Ok(0),
            };
        };
        let depth = self.depth;
        match &mut self.array_values[idx] {
            Some(child) => child.parse(data, depth + 1, pass_done),
            None => Ok(0),
        }
    }
}
