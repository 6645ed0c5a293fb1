//! # podlabel-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the podlabel workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and holds the SELinux label primitives the reconciler and
//! translators are built on.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
