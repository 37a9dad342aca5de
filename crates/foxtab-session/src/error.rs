//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Malformed session data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("No tabs found in session data")]
    NoTabsFound,

    #[error("Tab error: {0}")]
    Tab(#[from] foxtab_tabs::TabError),
}
