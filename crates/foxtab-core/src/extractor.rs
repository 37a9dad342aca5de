//! Extraction pipeline
//!
//! locate profile → read file → decode container → parse session → tabs.
//! Nothing is cached between calls.

use std::path::Path;

use foxtab_tabs::{compute_statistics, group_into_windows, Statistics, Tab, Window};

use crate::config::Config;
use crate::profile::{ProfileLocator, SessionSource};
use crate::Result;

/// Decode raw session file bytes into tabs.
pub fn decode_session(bytes: &[u8]) -> Result<Vec<Tab>> {
    let json = foxtab_lz4::decode(bytes)?;
    Ok(foxtab_session::parse_session(&json)?)
}

pub struct TabExtractor {
    config: Config,
}

impl TabExtractor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find the profile and session file this extractor would read
    pub fn locate(&self) -> Result<SessionSource> {
        ProfileLocator::new(&self.config).locate()
    }

    pub fn extract_tabs(&self) -> Result<Vec<Tab>> {
        let source = self.locate()?;
        self.extract_from_path(&source.session_file)
    }

    pub fn extract_from_path(&self, path: &Path) -> Result<Vec<Tab>> {
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "Read session file");

        let tabs = decode_session(&bytes)?;
        tracing::info!(path = %path.display(), tabs = tabs.len(), "Extracted tabs");
        Ok(tabs)
    }

    pub fn windows(&self, tabs: &[Tab]) -> Vec<Window> {
        group_into_windows(tabs.iter().cloned())
    }

    pub fn statistics(&self, tabs: &[Tab]) -> Statistics {
        compute_statistics(tabs)
    }
}

impl Default for TabExtractor {
    fn default() -> Self {
        Self::new(Config::from_env())
    }
}
