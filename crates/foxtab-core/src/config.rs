//! Extractor configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit profile directory
pub const PROFILE_ENV: &str = "FOXTAB_PROFILE";

/// Session files inside a profile, most current first
const SESSION_FILES: &[&str] = &[
    "sessionstore-backups/recovery.jsonlz4",
    "sessionstore-backups/recovery.baklz4",
    "sessionstore.jsonlz4",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Use this profile directory instead of searching
    pub profile_path: Option<PathBuf>,
    /// Directories holding Firefox profiles
    pub search_roots: Vec<PathBuf>,
    /// Session file candidates, relative to a profile directory
    pub session_files: Vec<PathBuf>,
}

impl Config {
    pub fn new(home: &Path) -> Self {
        Self {
            profile_path: None,
            search_roots: search_roots(home),
            session_files: SESSION_FILES.iter().map(PathBuf::from).collect(),
        }
    }

    /// Default configuration, honouring `FOXTAB_PROFILE`
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var_os(PROFILE_ENV) {
            Some(path) if !path.is_empty() => config.with_profile(PathBuf::from(path)),
            _ => config,
        }
    }

    pub fn with_profile(mut self, profile: PathBuf) -> Self {
        self.profile_path = Some(profile);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(&home)
    }
}

#[cfg(target_os = "linux")]
fn search_roots(home: &Path) -> Vec<PathBuf> {
    vec![
        home.join(".mozilla/firefox"),
        home.join("snap/firefox/common/.mozilla/firefox"),
        home.join(".var/app/org.mozilla.firefox/.mozilla/firefox"),
    ]
}

#[cfg(target_os = "macos")]
fn search_roots(home: &Path) -> Vec<PathBuf> {
    vec![home.join("Library/Application Support/Firefox/Profiles")]
}

#[cfg(target_os = "windows")]
fn search_roots(home: &Path) -> Vec<PathBuf> {
    let roaming = dirs::config_dir().unwrap_or_else(|| home.join("AppData").join("Roaming"));
    vec![roaming.join("Mozilla").join("Firefox").join("Profiles")]
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn search_roots(home: &Path) -> Vec<PathBuf> {
    vec![home.join(".mozilla/firefox")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = Config::new(Path::new("/home/user"));
        assert!(config.profile_path.is_none());
        assert!(!config.search_roots.is_empty());
        assert_eq!(
            config.session_files[0],
            PathBuf::from("sessionstore-backups/recovery.jsonlz4")
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_roots_include_snap() {
        let config = Config::new(Path::new("/home/user"));
        assert!(config
            .search_roots
            .contains(&PathBuf::from("/home/user/snap/firefox/common/.mozilla/firefox")));
    }

    #[test]
    fn test_with_profile() {
        let config = Config::new(Path::new("/home/user")).with_profile(PathBuf::from("/tmp/p"));
        assert_eq!(config.profile_path, Some(PathBuf::from("/tmp/p")));
    }
}
