//! Foxtab LZ4
//!
//! Decoder for the `mozLz40` container Firefox uses for session files
//! (`recovery.jsonlz4`, `sessionstore.jsonlz4`). The LZ4 block format is
//! implemented here directly; there is no block framing or checksum.
//!
//! The `encode` feature adds a compressor for building fixtures.

mod block;
#[cfg(any(test, feature = "encode"))]
mod compress;
mod container;
mod error;

pub use block::decompress_block;
#[cfg(any(test, feature = "encode"))]
pub use compress::compress_block;
#[cfg(any(test, feature = "encode"))]
pub use container::encode;
pub use container::{decode, HEADER_LEN, MAGIC};
pub use error::{BlockError, ContainerError};

pub type Result<T> = std::result::Result<T, ContainerError>;
