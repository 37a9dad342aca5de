//! Core error types
//!
//! Lower crates report failures in their own terms; they are folded here
//! into the kinds a caller acts on.

use thiserror::Error;

use foxtab_lz4::{BlockError, ContainerError};
use foxtab_session::SessionError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Firefox profile not found: {0}")]
    ProfileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session file: {0}")]
    Format(String),

    #[error("Failed to decompress session file: {0}")]
    Decompression(BlockError),

    #[error("Invalid session data: {0}")]
    SessionData(String),

    #[error("No tabs found in session data")]
    NoTabsFound,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ContainerError> for CoreError {
    fn from(err: ContainerError) -> Self {
        match err {
            ContainerError::Format(msg) => CoreError::Format(msg),
            ContainerError::Decompression(block) => CoreError::Decompression(block),
        }
    }
}

impl From<SessionError> for CoreError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoTabsFound => CoreError::NoTabsFound,
            SessionError::Malformed(e) => CoreError::SessionData(e.to_string()),
            SessionError::Tab(e) => CoreError::SessionData(e.to_string()),
        }
    }
}
