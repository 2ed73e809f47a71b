//! Decimal-to-binary conversion for JSON numbers.
//!
//! [`parse_float_prefix`] scans the strict JSON number grammar in a single
//! pass, collecting the decimal mantissa and exponent as it goes. When the
//! mantissa was captured exactly and the exponent is small, the value is
//! assembled with one floating-point multiply or divide by an exact power
//! of ten. Everything else goes through core's correctly-rounded decimal
//! parser on the already-validated span.

use crate::error::Error;
use crate::unescape::WHITESPACE;

/// Exact powers of 10 representable in an f64.
const POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// 10^19 is the largest power of ten that fits a u64 mantissa.
const MAX_MANT_DIGITS: usize = 19;

#[inline]
fn is_scalar_end(b: u8) -> bool {
    WHITESPACE[b as usize] || b == b',' || b == b'}' || b == b']'
}

struct FloatParts {
    mantissa: u64,
    exp10: i32,
    neg: bool,
    truncated: bool,
    len: usize,
}

/// Parses an f64 at the beginning of `data`, which must already be
/// stripped of leading whitespace. Returns the value and the number of
/// bytes consumed.
pub(crate) fn parse_float_prefix(data: &[u8]) -> Result<(f64, usize), Error> {
    let parts = scan_float(data)?;
    if !parts.truncated {
        if let Some(f) = exact(parts.mantissa, parts.exp10, parts.neg) {
            return Ok((f, parts.len));
        }
    }
    // The span is validated ASCII, so the str conversion cannot fail and
    // the parse cannot reject; core's parser is correctly rounded via
    // Eisel-Lemire with a big-decimal fallback.
    let span = core::str::from_utf8(&data[..parts.len]).map_err(|_| Error::InvalidNumber)?;
    let f: f64 = span.parse().map_err(|_| Error::InvalidNumber)?;
    if f.is_infinite() {
        return Err(Error::OutOfRange);
    }
    Ok((f, parts.len))
}

/// One pass over the JSON number grammar: optional sign, `0` or a nonzero
/// digit run, optional fraction, optional exponent. The byte after the
/// span must be a value delimiter or end-of-input.
fn scan_float(data: &[u8]) -> Result<FloatParts, Error> {
    let mut p = 0;
    let neg = data.first() == Some(&b'-');
    if neg {
        p += 1;
    }

    let mut mantissa: u64 = 0;
    let mut exp10: i32 = 0;
    let mut ndigits = 0;
    let mut truncated = false;

    match data.get(p) {
        Some(b'0') => p += 1,
        Some(b'1'..=b'9') => {
            while let Some(&c @ b'0'..=b'9') = data.get(p) {
                if ndigits < MAX_MANT_DIGITS {
                    mantissa = mantissa * 10 + u64::from(c - b'0');
                    ndigits += 1;
                } else {
                    truncated = true;
                    exp10 += 1;
                }
                p += 1;
            }
        }
        Some(_) => return Err(Error::InvalidNumber),
        None => return Err(Error::UnexpectedEof),
    }

    if let Some(b'.') = data.get(p) {
        p += 1;
        let frac_start = p;
        while let Some(&c @ b'0'..=b'9') = data.get(p) {
            if ndigits < MAX_MANT_DIGITS {
                mantissa = mantissa * 10 + u64::from(c - b'0');
                ndigits += 1;
                exp10 -= 1;
            } else {
                truncated = true;
            }
            p += 1;
        }
        if p == frac_start {
            return Err(Error::InvalidNumber);
        }
    }

    if let Some(b'e' | b'E') = data.get(p) {
        p += 1;
        let esign: i32 = match data.get(p) {
            Some(b'+') => {
                p += 1;
                1
            }
            Some(b'-') => {
                p += 1;
                -1
            }
            _ => 1,
        };
        let exp_start = p;
        let mut e: i32 = 0;
        while let Some(&c @ b'0'..=b'9') = data.get(p) {
            // Clamp; anything this large saturates to zero or infinity.
            if e < 10_000 {
                e = e * 10 + i32::from(c - b'0');
            }
            p += 1;
        }
        if p == exp_start {
            return Err(Error::InvalidNumber);
        }
        exp10 += esign * e;
    }

    match data.get(p) {
        None => {}
        Some(&b) if is_scalar_end(b) => {}
        Some(_) => return Err(Error::InvalidNumber),
    }

    Ok(FloatParts {
        mantissa,
        exp10,
        neg,
        truncated,
        len: p,
    })
}

/// Converts the decimal representation to an f64 entirely in
/// floating-point math when that is exact: an integer mantissa below 2^52
/// times (or divided by) an exact power of ten. Answers are correctly
/// rounded; `None` means the slow path must decide.
fn exact(mantissa: u64, exp: i32, neg: bool) -> Option<f64> {
    if mantissa >> 52 != 0 {
        return None;
    }
    let mut f = mantissa as f64;
    if neg {
        f = -f;
    }
    match exp {
        0 => Some(f),
        // Exact integers are <= 10^15; exact powers of ten are <= 10^22.
        e if e > 0 && e <= 15 + 22 => {
            let mut e = e;
            if e > 22 {
                f *= POW10[(e - 22) as usize];
                e = 22;
            }
            if !(-1e15..=1e15).contains(&f) {
                return None;
            }
            Some(f * POW10[e as usize])
        }
        e if e < 0 && e >= -22 => Some(f / POW10[(-e) as usize]),
        _ => None,
    }
}
