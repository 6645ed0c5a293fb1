//! Translator backed by the host's SELinux policy files.
//!
//! The default container file context is read once from
//! `<policy_root>/<policy>/contexts/lxc_contexts`; options override it
//! field by field.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use podlabel_common::config::SelinuxConfig;
use podlabel_common::constants::{
    DEFAULT_POLICY_NAME, LXC_CONTEXTS_PATH, LXC_FILE_KEY, POLICY_CONFIG_FILE,
    SELINUX_ENFORCE_FILE,
};
use podlabel_common::error::{PodLabelError, Result};
use podlabel_common::types::{MountLabel, SeLinuxOptions};

use super::{LabelTranslator, label_with_defaults};

/// Translator using the host's loaded policy.
#[derive(Debug, Clone)]
pub struct HostTranslator {
    /// Default file context, `None` when SELinux is disabled.
    file_context: Option<SeLinuxOptions>,
}

impl HostTranslator {
    /// Detects SELinux on the host and loads the default file context.
    ///
    /// Policy files are only read when SELinux is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if SELinux is enabled but the container contexts
    /// file is missing, unreadable, or lacks a valid `file` entry.
    pub fn load(config: &SelinuxConfig) -> Result<Self> {
        if !config.selinuxfs_mount.join(SELINUX_ENFORCE_FILE).exists() {
            tracing::info!(
                selinuxfs = %config.selinuxfs_mount.display(),
                "SELinux not enabled on host"
            );
            return Ok(Self { file_context: None });
        }

        let policy = read_policy_name(&config.policy_root)?;
        let contexts = config.policy_root.join(&policy).join(LXC_CONTEXTS_PATH);
        let file_context = read_file_context(&contexts)?.to_options()?;
        tracing::info!(
            policy = %policy,
            user = %file_context.user,
            role = %file_context.role,
            type_ = %file_context.type_,
            level = %file_context.level,
            "loaded default container file context"
        );
        Ok(Self {
            file_context: Some(file_context),
        })
    }

    /// Returns the default container file context, if SELinux is enabled.
    #[must_use]
    pub const fn file_context(&self) -> Option<&SeLinuxOptions> {
        self.file_context.as_ref()
    }
}

impl LabelTranslator for HostTranslator {
    fn translate(&self, options: &SeLinuxOptions) -> Result<MountLabel> {
        match &self.file_context {
            Some(defaults) if !options.is_empty() => Ok(label_with_defaults(options, defaults)),
            _ => Ok(MountLabel::default()),
        }
    }

    fn selinux_enabled(&self) -> bool {
        self.file_context.is_some()
    }
}

/// Reads `SELINUXTYPE` from the policy config, defaulting to `targeted`.
fn read_policy_name(policy_root: &Path) -> Result<String> {
    let path = policy_root.join(POLICY_CONFIG_FILE);
    let Some(raw) = read_optional(&path)? else {
        tracing::debug!(path = %path.display(), "no policy config, using default policy");
        return Ok(DEFAULT_POLICY_NAME.to_string());
    };
    let policy = raw
        .lines()
        .filter_map(split_entry)
        .find(|(key, _)| *key == "SELINUXTYPE")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_POLICY_NAME);
    Ok(policy.to_string())
}

/// Reads the `file` entry of an `lxc_contexts` file.
fn read_file_context(path: &Path) -> Result<MountLabel> {
    let raw = read_optional(path)?.ok_or_else(|| PodLabelError::NotFound {
        kind: "lxc contexts file",
        id: path.display().to_string(),
    })?;
    raw.lines()
        .filter_map(split_entry)
        .find(|(key, _)| *key == LXC_FILE_KEY)
        .map(|(_, value)| MountLabel::new(value))
        .ok_or_else(|| PodLabelError::NotFound {
            kind: "lxc file context",
            id: path.display().to_string(),
        })
}

/// Splits a `key = value` line, ignoring comments and blank lines.
/// Whitespace and surrounding double quotes are stripped from the value.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Some((key.trim(), value))
}

/// Reads a file, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PodLabelError::Io {
            path: PathBuf::from(path),
            source: e,
        }),
    }
}
