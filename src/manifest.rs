//! Manifest loading helpers.
//!
//! This module reads a `modplan.yml` and hands back the parsed [`Manifest`].
//! It is deliberately thin: the descriptor shapes live in [`crate::ast`] and
//! all graph validation happens at registration and plan time, so loading
//! only has to locate the file and run the YAML through serde.

use crate::ast::Manifest;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Parse a manifest from a YAML string.
///
/// # Errors
///
/// Returns an error if the YAML fails to parse or does not match the
/// manifest schema.
///
/// # Examples
///
/// ```rust
/// let manifest = modplan::manifest::from_str(
///     "modplan_version: \"1.0.0\"\nmodules:\n  - name: Core\n",
/// )
/// .expect("parse");
/// assert_eq!(manifest.modules.len(), 1);
/// ```
pub fn from_str(yaml: &str) -> Result<Manifest> {
    serde_yml::from_str(yaml).context("parsing manifest YAML")
}

/// Load a [`Manifest`] from the given file path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the YAML fails to parse.
pub fn from_path(path: impl AsRef<Path>) -> Result<Manifest> {
    let path_ref = path.as_ref();
    let data = fs::read_to_string(path_ref)
        .with_context(|| format!("failed to read {}", path_ref.display()))?;
    serde_yml::from_str(&data).with_context(|| format!("parsing {}", path_ref.display()))
}
