//! System-wide constants and default paths.

/// Mount point of the SELinux pseudo-filesystem.
pub const DEFAULT_SELINUXFS_MOUNT: &str = "/sys/fs/selinux";

/// Directory holding the SELinux policy configuration.
pub const DEFAULT_POLICY_ROOT: &str = "/etc/selinux";

/// Name of the policy configuration file inside the policy root.
pub const POLICY_CONFIG_FILE: &str = "config";

/// Policy used when `SELINUXTYPE` is not set.
pub const DEFAULT_POLICY_NAME: &str = "targeted";

/// Path of the container contexts file, relative to a policy directory.
pub const LXC_CONTEXTS_PATH: &str = "contexts/lxc_contexts";

/// Key of the default file context in `lxc_contexts`.
pub const LXC_FILE_KEY: &str = "file";

/// File whose presence under the selinuxfs mount means SELinux is active.
pub const SELINUX_ENFORCE_FILE: &str = "enforce";

/// SELinux user assigned to container files when none is given.
pub const DEFAULT_USER: &str = "system_u";
/// SELinux role assigned to container files when none is given.
pub const DEFAULT_ROLE: &str = "object_r";
/// SELinux type assigned to container files when none is given.
pub const DEFAULT_TYPE: &str = "container_file_t";
/// Sensitivity level assigned when none is given.
pub const DEFAULT_LEVEL: &str = "s0";

/// Separator between label components.
pub const LABEL_SEPARATOR: char = ':';

/// Number of components in a full `user:role:type:level` label.
pub const LABEL_COMPONENTS: usize = 4;
