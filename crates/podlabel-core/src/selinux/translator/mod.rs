//! Translation of structured SELinux options into flat mount labels.

pub mod fake;
pub mod host;

use podlabel_common::error::Result;
use podlabel_common::types::{MountLabel, SeLinuxOptions};

/// Converts [`SeLinuxOptions`] into the label a volume is mounted with.
///
/// Implementors are immutable after construction and may be shared
/// between threads.
pub trait LabelTranslator: Send + Sync {
    /// Translates options into a mount label.
    ///
    /// The empty label means the options impose no label.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot be mapped to a label.
    fn translate(&self, options: &SeLinuxOptions) -> Result<MountLabel>;

    /// Returns whether SELinux is active on the host.
    fn selinux_enabled(&self) -> bool;
}

/// Fills the empty fields of `options` from `defaults` and joins the result.
pub(crate) fn label_with_defaults(
    options: &SeLinuxOptions,
    defaults: &SeLinuxOptions,
) -> MountLabel {
    fn pick<'a>(value: &'a str, fallback: &'a str) -> &'a str {
        if value.is_empty() {
            fallback
        } else {
            value
        }
    }
    MountLabel::from_parts(
        pick(&options.user, &defaults.user),
        pick(&options.role, &defaults.role),
        pick(&options.type_, &defaults.type_),
        pick(&options.level, &defaults.level),
    )
}
