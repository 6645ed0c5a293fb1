//! # podlabel-core
//!
//! SELinux mount label reconciliation for the volumes of a pod.
//!
//! This crate provides:
//! - **Reconciler**: merges the labels of every volume into one mount label,
//!   or reports that the volumes disagree.
//! - **Translators**: the [`selinux::translator::LabelTranslator`] seam, with a
//!   host-policy implementation and a deterministic fake.
//! - **Pod helpers**: derivation of effective per-container options.

pub mod pod;
pub mod selinux;
