//! Firefox profile discovery
//!
//! Profiles live in directories named `<salt>.<name>`; the ones created by a
//! normal install are `*.default` or `*.default-release`. The first profile
//! with a session file wins, `default-release` before the rest.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// A located profile and the session file to read from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSource {
    pub profile_dir: PathBuf,
    pub session_file: PathBuf,
}

pub struct ProfileLocator<'a> {
    config: &'a Config,
}

impl<'a> ProfileLocator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn locate(&self) -> Result<SessionSource> {
        if let Some(profile) = &self.config.profile_path {
            return self.session_in(profile).ok_or_else(|| {
                CoreError::ProfileNotFound(format!(
                    "no session file in {}",
                    profile.display()
                ))
            });
        }

        for root in &self.config.search_roots {
            for profile in candidate_profiles(root) {
                if let Some(source) = self.session_in(&profile) {
                    tracing::info!(
                        profile = %source.profile_dir.display(),
                        session_file = %source.session_file.display(),
                        "Found Firefox profile"
                    );
                    return Ok(source);
                }
                tracing::debug!(profile = %profile.display(), "Profile has no session file");
            }
        }

        Err(CoreError::ProfileNotFound(format!(
            "searched {}",
            self.config
                .search_roots
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }

    fn session_in(&self, profile: &Path) -> Option<SessionSource> {
        self.config
            .session_files
            .iter()
            .map(|rel| profile.join(rel))
            .find(|path| path.is_file())
            .map(|session_file| SessionSource {
                profile_dir: profile.to_path_buf(),
                session_file,
            })
    }
}

/// Profile directories under `root`, in preference order
fn candidate_profiles(root: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(root = %root.display(), error = %e, "Skipping profile root");
            return Vec::new();
        }
    };

    let mut profiles: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.contains(".default"))
        })
        .collect();

    profiles.sort_by_key(|path| {
        let release = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".default-release"));
        (!release, path.clone())
    });
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> Config {
        let mut config = Config::new(root);
        config.search_roots = vec![root.to_path_buf()];
        config
    }

    fn touch_session(profile: &Path, rel: &str) -> PathBuf {
        let path = profile.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"mozLz40\0").unwrap();
        path
    }

    #[test]
    fn test_locate_default_release_first() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("aaaa.default");
        let release = dir.path().join("zzzz.default-release");
        touch_session(&plain, "sessionstore-backups/recovery.jsonlz4");
        let expected = touch_session(&release, "sessionstore-backups/recovery.jsonlz4");

        let config = config_for(dir.path());
        let source = ProfileLocator::new(&config).locate().unwrap();
        assert_eq!(source.profile_dir, release);
        assert_eq!(source.session_file, expected);
    }

    #[test]
    fn test_skips_profiles_without_session() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("aaaa.default-release")).unwrap();
        let expected = touch_session(&dir.path().join("bbbb.default"), "sessionstore.jsonlz4");
        fs::create_dir_all(dir.path().join("Crash Reports")).unwrap();

        let config = config_for(dir.path());
        let source = ProfileLocator::new(&config).locate().unwrap();
        assert_eq!(source.session_file, expected);
    }

    #[test]
    fn test_recovery_preferred_over_backup() {
        let dir = TempDir::new().unwrap();
        let profile = dir.path().join("abcd.default");
        touch_session(&profile, "sessionstore-backups/recovery.baklz4");
        let expected = touch_session(&profile, "sessionstore-backups/recovery.jsonlz4");

        let config = config_for(dir.path());
        assert_eq!(
            ProfileLocator::new(&config).locate().unwrap().session_file,
            expected
        );
    }

    #[test]
    fn test_explicit_profile() {
        let dir = TempDir::new().unwrap();
        let profile = dir.path().join("custom");
        let expected = touch_session(&profile, "sessionstore-backups/recovery.jsonlz4");

        let config = Config::new(dir.path()).with_profile(profile.clone());
        let source = ProfileLocator::new(&config).locate().unwrap();
        assert_eq!(source.profile_dir, profile);
        assert_eq!(source.session_file, expected);
    }

    #[test]
    fn test_profile_not_found() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir.path().join("missing"));
        assert!(matches!(
            ProfileLocator::new(&config).locate(),
            Err(CoreError::ProfileNotFound(_))
        ));

        let config = Config::new(dir.path()).with_profile(dir.path().join("nope"));
        assert!(matches!(
            ProfileLocator::new(&config).locate(),
            Err(CoreError::ProfileNotFound(_))
        ));
    }
}
