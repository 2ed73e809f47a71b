use alloc::format;
use alloc::string::{String, ToString};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{
    handle_array_values, handle_object_values, read_float64, read_int64, read_uint64, read_value,
    skip_value, skip_value_fast, valid, Buffer, Error, Map, Value,
};

/// JSON-safe generator: finite numbers only, bounded container depth.
#[derive(Clone, Debug)]
struct ArbitraryJson(Value);

fn gen_value(g: &mut Gen, depth: usize) -> Value {
    let variants = if depth == 0 { 4 } else { 6 };
    match u8::arbitrary(g) % variants {
        0 => Value::Null,
        1 => Value::Boolean(bool::arbitrary(g)),
        2 => {
            let f = f64::arbitrary(g);
            Value::Number(if f.is_finite() { f } else { 0.0 })
        }
        3 => Value::String(String::arbitrary(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| gen_value(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            Value::Object(
                (0..len)
                    .map(|_| (String::arbitrary(g), gen_value(g, depth - 1)))
                    .collect(),
            )
        }
    }
}

impl Arbitrary for ArbitraryJson {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbitraryJson(gen_value(g, 3))
    }
}

fn to_our_value(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap()),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(a) => Value::Array(a.iter().map(to_our_value).collect()),
        serde_json::Value::Object(o) => Value::Object(
            o.iter()
                .map(|(k, v)| (k.clone(), to_our_value(v)))
                .collect::<Map>(),
        ),
    }
}

/// Serialized documents are valid and consumed to the last byte.
#[test]
fn serialized_documents_validate() {
    fn prop(value: ArbitraryJson) -> bool {
        let doc = value.0.to_string();
        let mut buf = Buffer::new();
        valid(doc.as_bytes(), Some(&mut buf))
            && skip_value(doc.as_bytes(), Some(&mut buf)) == Ok(doc.len())
    }
    QuickCheck::new().quickcheck(prop as fn(ArbitraryJson) -> bool);
}

/// Skipping the skipped prefix again lands on the same boundary.
#[test]
fn skip_is_idempotent_on_arbitrary_documents() {
    fn prop(value: ArbitraryJson, pad: u8) -> bool {
        let mut doc = value.0.to_string().into_bytes();
        // At least one space so trailing junk never fuses with a scalar.
        for _ in 0..=pad % 4 {
            doc.push(b' ');
        }
        doc.extend_from_slice(b"junk");
        let Ok(p) = skip_value(&doc, None) else {
            return false;
        };
        skip_value(&doc[..p], None) == Ok(p)
    }
    QuickCheck::new().quickcheck(prop as fn(ArbitraryJson, u8) -> bool);
}

/// Structural-only skipping agrees with the strict machine on valid input.
#[test]
fn fast_skip_matches_strict_skip() {
    fn prop(value: ArbitraryJson) -> bool {
        let doc = value.0.to_string();
        skip_value_fast(doc.as_bytes(), None) == skip_value(doc.as_bytes(), None)
    }
    QuickCheck::new().quickcheck(prop as fn(ArbitraryJson) -> bool);
}

/// The generic reader agrees with the reference decoder.
#[test]
fn reader_matches_reference_decoder() {
    fn prop(value: ArbitraryJson) -> bool {
        let doc = value.0.to_string();
        let (ours, p) = read_value(doc.as_bytes()).unwrap();
        let reference: serde_json::Value = serde_json::from_str(&doc).unwrap();
        p == doc.len() && ours == to_our_value(&reference)
    }
    QuickCheck::new().quickcheck(prop as fn(ArbitraryJson) -> bool);
}

/// A walker whose callback always declines advances exactly like skip.
#[test]
fn declining_walker_matches_skip() {
    fn prop(value: ArbitraryJson) -> bool {
        let doc = match &value.0 {
            v @ Value::Object(_) | v @ Value::Array(_) => v.to_string(),
            other => Value::Array(alloc::vec![other.clone()]).to_string(),
        };
        let data = doc.as_bytes();
        let walked = if data[0] == b'{' {
            handle_object_values(
                data,
                &mut |_: &[u8], _: &[u8]| -> Result<usize, Error> { Ok(0) },
                None,
            )
        } else {
            handle_array_values(data, &mut |_: &[u8]| -> Result<usize, Error> { Ok(0) }, None)
        };
        walked == skip_value(data, None)
    }
    QuickCheck::new().quickcheck(prop as fn(ArbitraryJson) -> bool);
}

/// Formatted primitives read back to the same value and full advance.
#[test]
fn primitive_round_trips() {
    fn prop_i64(v: i64) -> bool {
        let s = format!("{v}");
        read_int64(s.as_bytes()) == Ok((v, s.len()))
    }
    fn prop_u64(v: u64) -> bool {
        let s = format!("{v}");
        read_uint64(s.as_bytes()) == Ok((v, s.len()))
    }
    fn prop_f64(v: f64) -> bool {
        if !v.is_finite() {
            return true;
        }
        let s = format!("{v}");
        match read_float64(s.as_bytes()) {
            Ok((back, p)) => back == v && p == s.len(),
            Err(_) => false,
        }
    }
    QuickCheck::new().quickcheck(prop_i64 as fn(i64) -> bool);
    QuickCheck::new().quickcheck(prop_u64 as fn(u64) -> bool);
    QuickCheck::new().quickcheck(prop_f64 as fn(f64) -> bool);
}
