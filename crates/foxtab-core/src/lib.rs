//! Foxtab Core
//!
//! Ties the pieces together: find a Firefox profile, read its session file,
//! decode it into tabs and export them. The decode/parse/aggregate steps are
//! pure; this crate owns the filesystem access.

mod config;
mod error;
mod export;
mod extractor;
mod profile;

pub use config::{Config, PROFILE_ENV};
pub use error::CoreError;
pub use export::{save_csv, save_json, to_csv, to_json, ExportDocument, CSV_HEADER};
pub use extractor::{decode_session, TabExtractor};
pub use profile::{ProfileLocator, SessionSource};

// Re-export the model
pub use foxtab_tabs::{
    compute_statistics, domain_counts, group_into_windows, recently_accessed, DomainCount,
    Statistics, Tab, TabError, Window, WindowSummary, NO_TIMESTAMP,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` wins over `default_level`. Output goes to stderr.
pub fn init_logging(default_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
