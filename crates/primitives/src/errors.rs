//! Errors during parsing/conversion of primitives.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("unknown script hash type {0:?}")]
    UnknownHashType(String),

    #[error("malformed epoch {0:?}, expected `number+index/length`")]
    MalformedEpoch(String),
}
