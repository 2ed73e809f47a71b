use alloc::vec::Vec;

/// A reusable stack buffer for functions that read nested objects and
/// arrays.
///
/// The recognizer and the walkers track container nesting in a `Buffer`
/// instead of allocating per call. Reusing one across sequential calls
/// keeps the hot path allocation-free once the deepest document has been
/// seen; every top-level entry point resets the length while keeping the
/// capacity.
///
/// A `Buffer` is owned by exactly one caller for the duration of a call and
/// is not meant to be shared across threads; give each worker its own.
///
/// ```
/// use jsonscan::{skip_value, Buffer};
///
/// let mut buf = Buffer::new();
/// let p = skip_value(br#"[1,[2,[3]]] tail"#, Some(&mut buf)).unwrap();
/// assert_eq!(p, 11);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    pub(crate) stack: Vec<u8>,
}

impl Buffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        self.stack.clear();
    }
}
