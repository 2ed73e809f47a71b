use alloc::string::String;
use alloc::vec::Vec;

use crate::{skip_value, skip_value_fast, valid, Buffer, Error, MAX_DEPTH};

#[test]
fn valid_rejects() {
    let mut buf = Buffer::new();
    let mut cases: Vec<Vec<u8>> = [
        &br#"{"a":"b":"c"}"#[..],
        b"{1: 1}",
        b"[[[[]]]",
        b"0.1e",
        b".1",
        b"1.e1",
        b"--123",
        b"",
        b"   ",
        b"tru",
        b"truex",
        b"nullx",
        b"[1,]",
        br#"{"a":1,}"#,
        b"{,}",
        b"[}",
        b"{]",
        b"01",
        b"1 2",
        b"{} {}",
        br#"{"a" 1}"#,
        br#"{"a":}"#,
        br#""unterminated"#,
        br#""bad escape \q""#,
        b"+1",
        b"0x10",
    ]
    .iter()
    .map(|c| c.to_vec())
    .collect();
    // A raw control byte inside a string body.
    cases.push(b"{\"foo\": \"\x14\"}".to_vec());

    for doc in &cases {
        assert!(
            !valid(doc, Some(&mut buf)),
            "expected invalid: {:?}",
            String::from_utf8_lossy(doc)
        );
    }
}

#[test]
fn skip_error_kinds() {
    assert_eq!(skip_value(b"", None), Err(Error::UnexpectedEof));
    assert_eq!(skip_value(b"   ", None), Err(Error::UnexpectedEof));
    assert_eq!(skip_value(b"[1", None), Err(Error::UnexpectedEof));
    assert_eq!(skip_value(br#"{"a""#, None), Err(Error::UnexpectedEof));
    assert_eq!(skip_value(br#"{"a":"#, None), Err(Error::UnexpectedEof));
    assert_eq!(skip_value(br#""no end"#, None), Err(Error::UnexpectedEof));
    assert_eq!(skip_value(b"tr", None), Err(Error::UnexpectedEof));

    assert_eq!(skip_value(b"123abc", None), Err(Error::InvalidNumber));
    assert_eq!(skip_value(b"1.e1", None), Err(Error::InvalidNumber));
    assert_eq!(skip_value(b"{1: 1}", None), Err(Error::InvalidObject));
    assert_eq!(skip_value(br#"{"a":"b":"c"}"#, None), Err(Error::InvalidObject));
    assert_eq!(skip_value(b"[1; 2]", None), Err(Error::InvalidArray));
    assert_eq!(skip_value(b"@", None), Err(Error::NoValidToken));
    assert_eq!(skip_value(b"\"a\x07b\"", None), Err(Error::InvalidString));
}

#[test]
fn trailing_garbage_is_the_callers_problem() {
    // skip_value stops after the value; only valid() rejects the tail.
    assert_eq!(skip_value(b"1 2", None), Ok(1));
    assert_eq!(skip_value(br#""s"x"#, None), Ok(3));
    assert_eq!(skip_value(b"{} {}", None), Ok(2));
    assert!(!valid(b"1 2", None));
}

#[test]
fn nesting_beyond_the_depth_limit_fails_without_overflow() {
    let mut buf = Buffer::new();
    for (open, close) in [("[", "]"), ("{\"k\":", "}")] {
        let mut doc = String::new();
        for _ in 0..=MAX_DEPTH {
            doc.push_str(open);
        }
        for _ in 0..=MAX_DEPTH {
            doc.push_str(close);
        }
        assert_eq!(skip_value(doc.as_bytes(), Some(&mut buf)), Err(Error::MaxDepth));
        assert_eq!(
            skip_value_fast(doc.as_bytes(), Some(&mut buf)),
            Err(Error::MaxDepth)
        );
        assert!(!valid(doc.as_bytes(), Some(&mut buf)));
    }
}

#[test]
fn fast_mode_checks_structure_only() {
    let mut buf = Buffer::new();
    // Interior scalars are trusted, brackets and strings are not.
    assert!(skip_value_fast(b"[not, real, json]", Some(&mut buf)).is_ok());
    assert_eq!(
        skip_value_fast(b"[1, 2", Some(&mut buf)),
        Err(Error::UnexpectedEof)
    );
    assert_eq!(
        skip_value_fast(br#""open"#, Some(&mut buf)),
        Err(Error::UnexpectedEof)
    );
    // The strict machine rejects what fast waves through.
    assert!(skip_value(b"[not, real, json]", Some(&mut buf)).is_err());
}
