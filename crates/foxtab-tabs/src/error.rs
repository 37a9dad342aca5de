//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Invalid {kind} index: indices start at 1")]
    InvalidIndex { kind: &'static str },

    #[error("Tab belongs to window {tab_window}, not window {window}")]
    WindowMismatch { window: usize, tab_window: usize },
}
