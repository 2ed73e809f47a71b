use thiserror::Error;

/// The closed set of failures reported by every entry point in the crate.
///
/// Exact display strings are not part of the contract; match on the variant
/// instead. [`Error::Stop`] is never produced by the library itself — it is
/// the constructible early-stop sentinel for walker callbacks (see
/// [`handle_object_values`](crate::handle_object_values)) and the
/// `done_err` of [`JsonValue`](crate::JsonValue), returned verbatim so the
/// caller can recognize it by comparison.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of json")]
    UnexpectedEof,
    #[error("invalid json string")]
    InvalidString,
    #[error("invalid json array")]
    InvalidArray,
    #[error("invalid json object")]
    InvalidObject,
    #[error("invalid json uint")]
    InvalidUint,
    #[error("invalid json int")]
    InvalidInt,
    #[error("invalid json number")]
    InvalidNumber,
    #[error("value out of range")]
    OutOfRange,
    #[error("no valid json token found")]
    NoValidToken,
    #[error("not a boolean value")]
    NotBool,
    #[error("not null")]
    NotNull,
    #[error("exceeded maximum nesting depth")]
    MaxDepth,
    /// Early-stop sentinel for handler callbacks; see the crate docs on
    /// cancelling a walk.
    #[error("done")]
    Stop,
}
