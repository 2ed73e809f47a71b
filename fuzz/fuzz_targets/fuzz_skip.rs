#![no_main]
use jsonscan::{read_value, skip_value, skip_value_fast, valid, Buffer};
use libfuzzer_sys::fuzz_target;

fn scan(data: &[u8]) {
    let mut buf = Buffer::new();

    if let Ok(p) = skip_value(data, Some(&mut buf)) {
        assert!(p <= data.len(), "advance past the end of input");
        // The structural machine must agree on anything strict accepts.
        assert_eq!(skip_value_fast(data, Some(&mut buf)), Ok(p));
        // Skipping the accepted prefix again lands on the same boundary.
        assert_eq!(skip_value(&data[..p], Some(&mut buf)), Ok(p));
    }

    if valid(data, Some(&mut buf)) {
        read_value(data).expect("valid document rejected by the generic reader");
    }

    // Everything the reference decoder accepts, we accept. (The reverse
    // does not hold: the reference enforces a shallow recursion limit,
    // rejects lone surrogate escapes, and range-checks numbers.)
    if serde_json::from_slice::<serde_json::Value>(data).is_ok() {
        assert!(valid(data, Some(&mut buf)), "reference-accepted document rejected");
    }
}

fuzz_target!(|data: &[u8]| scan(data));
