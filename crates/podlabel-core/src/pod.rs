//! Pod-level derivation of the options that feed label reconciliation.

use podlabel_common::error::Result;
use podlabel_common::types::{MountLabel, SeLinuxOptions};

use crate::selinux::mount_selinux_label;
use crate::selinux::translator::LabelTranslator;

/// Returns the options a container actually runs with.
///
/// Container-level options replace the pod-level ones as a whole; fields are
/// not merged.
#[must_use]
pub fn effective_options<'a>(
    pod: Option<&'a SeLinuxOptions>,
    container: Option<&'a SeLinuxOptions>,
) -> Option<&'a SeLinuxOptions> {
    container.or(pod)
}

/// Maps each container's own options through [`effective_options`].
#[must_use]
pub fn pod_volume_options<'a, I>(
    pod: Option<&'a SeLinuxOptions>,
    containers: I,
) -> Vec<Option<&'a SeLinuxOptions>>
where
    I: IntoIterator<Item = Option<&'a SeLinuxOptions>>,
{
    containers
        .into_iter()
        .map(|container| effective_options(pod, container))
        .collect()
}

/// Resolves the mount label for the volumes shared by a pod's containers.
///
/// # Errors
///
/// Returns an error if the containers' effective options translate to
/// different labels, or if translation fails.
pub fn pod_mount_label<'a, I, T>(
    pod: Option<&'a SeLinuxOptions>,
    containers: I,
    translator: &T,
) -> Result<MountLabel>
where
    I: IntoIterator<Item = Option<&'a SeLinuxOptions>>,
    T: LabelTranslator + ?Sized,
{
    let options = pod_volume_options(pod, containers);
    tracing::debug!(containers = options.len(), "resolving pod mount label");
    mount_selinux_label(options, translator)
}
