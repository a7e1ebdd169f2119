// file: src/interp/expand.rs
// version: 1.0.0
// guid: 9e61b3a8-4c27-4d90-8f5a-de13c076b245

//! Path expansion service: leading `~` and `$VAR` substitution.
//!
//! Expansion runs before any filesystem call, and its failures are reported
//! as a distinct error class from the OS call that would have followed.

use crate::{CommandError, Result};

/// Expand a user-supplied path: home directory for a leading tilde, plus
/// environment-variable substitution
pub fn expand_path(path: &str) -> Result<String> {
    shellexpand::full(path)
        .map(|expanded| expanded.into_owned())
        .map_err(|e| CommandError::PathExpansion(format!("{path}: {e}")))
}
