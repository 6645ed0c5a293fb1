//! Deterministic translator that needs no host policy.

use podlabel_common::constants::{DEFAULT_LEVEL, DEFAULT_ROLE, DEFAULT_TYPE, DEFAULT_USER};
use podlabel_common::error::Result;
use podlabel_common::types::{MountLabel, SeLinuxOptions};

use super::{LabelTranslator, label_with_defaults};

/// Translator that formats options as `user:role:type:level`, filling empty
/// fields with `system_u:object_r:container_file_t:s0`.
#[derive(Debug, Clone, Copy)]
pub struct FakeTranslator {
    enabled: bool,
}

impl FakeTranslator {
    /// Creates a translator that reports SELinux as enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    /// Creates a translator that reports SELinux as disabled.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for FakeTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelTranslator for FakeTranslator {
    fn translate(&self, options: &SeLinuxOptions) -> Result<MountLabel> {
        let defaults = SeLinuxOptions {
            user: DEFAULT_USER.to_string(),
            role: DEFAULT_ROLE.to_string(),
            type_: DEFAULT_TYPE.to_string(),
            level: DEFAULT_LEVEL.to_string(),
        };
        Ok(label_with_defaults(options, &defaults))
    }

    fn selinux_enabled(&self) -> bool {
        self.enabled
    }
}
