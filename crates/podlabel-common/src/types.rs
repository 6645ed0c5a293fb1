//! Domain primitive types used across the podlabel workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{LABEL_COMPONENTS, LABEL_SEPARATOR};
use crate::error::{PodLabelError, Result};

/// Structured SELinux options attached to a pod, container, or volume.
///
/// Field names follow the Kubernetes `SELinuxOptions` JSON shape. Every field
/// may be empty, in which case the translator decides the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SeLinuxOptions {
    /// SELinux user component.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user: String,
    /// SELinux role component.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role: String,
    /// SELinux type component.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    /// MLS/MCS level, e.g. `s0:c123,c456`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub level: String,
}

impl SeLinuxOptions {
    /// Creates options that only carry a level.
    #[must_use]
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user.is_empty()
            && self.role.is_empty()
            && self.type_.is_empty()
            && self.level.is_empty()
    }

    /// Parses options from their JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid options document.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Flat SELinux label applied to a filesystem mount, in
/// `user:role:type:level` form.
///
/// The empty label means no mount label is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountLabel(String);

impl MountLabel {
    /// Creates a label from a string value.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Builds a label from its four components.
    #[must_use]
    pub fn from_parts(user: &str, role: &str, type_: &str, level: &str) -> Self {
        Self(format!(
            "{user}{LABEL_SEPARATOR}{role}{LABEL_SEPARATOR}{type_}{LABEL_SEPARATOR}{level}"
        ))
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when no label is required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the label back into structured options.
    ///
    /// The level keeps any further separators, so `s0:c1,c2` survives intact.
    ///
    /// # Errors
    ///
    /// Returns [`PodLabelError::InvalidLabel`] if the label has fewer than
    /// four components.
    pub fn to_options(&self) -> Result<SeLinuxOptions> {
        let parts: Vec<&str> = self.0.splitn(LABEL_COMPONENTS, LABEL_SEPARATOR).collect();
        match parts.as_slice() {
            [user, role, type_, level] => Ok(SeLinuxOptions {
                user: (*user).to_string(),
                role: (*role).to_string(),
                type_: (*type_).to_string(),
                level: (*level).to_string(),
            }),
            _ => Err(PodLabelError::InvalidLabel {
                label: self.0.clone(),
            }),
        }
    }
}

impl fmt::Display for MountLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
