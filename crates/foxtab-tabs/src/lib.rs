//! Foxtab Tab Model
//!
//! Tabs recovered from a session file are immutable records. Windows are not
//! stored anywhere: they are folded out of a flat tab list on demand, and so
//! are the summary statistics.

mod error;
mod stats;
mod tab;
mod window;

pub use error::TabError;
pub use stats::{compute_statistics, domain_counts, recently_accessed, DomainCount, Statistics};
pub use tab::{Tab, NO_TIMESTAMP};
pub use window::{group_into_windows, Window, WindowSummary};

pub type Result<T> = std::result::Result<T, TabError>;
