//! Host SELinux configuration model.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PodLabelError, Result};

/// Locations the host translator reads SELinux state from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelinuxConfig {
    /// Mount point of selinuxfs.
    pub selinuxfs_mount: PathBuf,
    /// Directory holding `config` and the per-policy directories.
    pub policy_root: PathBuf,
}

impl Default for SelinuxConfig {
    fn default() -> Self {
        Self {
            selinuxfs_mount: PathBuf::from(crate::constants::DEFAULT_SELINUXFS_MOUNT),
            policy_root: PathBuf::from(crate::constants::DEFAULT_POLICY_ROOT),
        }
    }
}

impl SelinuxConfig {
    /// Loads a configuration from a JSON file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| PodLabelError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_host_paths() {
        let cfg = SelinuxConfig::default();
        assert_eq!(cfg.selinuxfs_mount, PathBuf::from("/sys/fs/selinux"));
        assert_eq!(cfg.policy_root, PathBuf::from("/etc/selinux"));
    }

    #[test]
    fn from_json_file_fills_missing_keys() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("selinux.json");
        std::fs::write(&path, r#"{"policy_root":"/tmp/policy"}"#).expect("failed to write");
        let cfg = SelinuxConfig::from_json_file(&path).expect("load failed");
        assert_eq!(cfg.policy_root, PathBuf::from("/tmp/policy"));
        assert_eq!(cfg.selinuxfs_mount, PathBuf::from("/sys/fs/selinux"));
    }

    #[test]
    fn from_json_file_missing_file_returns_io_error() {
        let err = SelinuxConfig::from_json_file(Path::new("/nonexistent/selinux.json"))
            .expect_err("must fail");
        assert!(matches!(err, PodLabelError::Io { .. }));
    }
}
