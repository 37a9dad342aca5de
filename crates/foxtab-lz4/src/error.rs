//! Container and block error types

use thiserror::Error;

/// Failure while decoding a raw LZ4 block
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("Unexpected end of block at byte {position}")]
    UnexpectedEnd { position: usize },

    #[error("Literal run of {length} bytes at byte {position} exceeds block")]
    TruncatedLiterals { position: usize, length: usize },

    #[error("Invalid match offset {offset} with {available} bytes decoded")]
    InvalidOffset { offset: usize, available: usize },

    #[error("Decoded data exceeds declared length of {limit} bytes")]
    OutputOverflow { limit: usize },

    #[error("Declared length {declared} but decoded {actual} bytes")]
    LengthMismatch { declared: usize, actual: usize },
}

/// Failure while decoding a `mozLz40` container
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("Format error: {0}")]
    Format(String),

    #[error("Decompression error: {0}")]
    Decompression(#[from] BlockError),
}
