use thiserror::Error;

/// Errors raised while decoding proof-output byte blobs.
///
/// Each variant names the exact invariant that failed so callers can tell a
/// corrupt encoding apart from an oversized or truncated one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed encoding: {0} offset word does not match the canonical layout")]
    MalformedEncoding(&'static str),

    #[error("byte slice truncated: need at least {needed} bytes, got {got}")]
    TruncatedInput { needed: usize, got: usize },

    #[error("too many storage slots: {0} exceeds the maximum of 50")]
    TooManySlots(usize),

    #[error("value out of range for u64 in field '{0}'")]
    IntegerOverflow(&'static str),

    #[error("byte slice must be exactly {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}
