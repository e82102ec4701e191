//! Workspace introspection via `cargo metadata`
//!
//! Only package names are read out of the document. The rest of the schema
//! belongs to cargo and is deliberately ignored, so schema changes upstream
//! cannot break this tool.

use crate::error::{ReleaseError, ReleaseResult};
use serde::Deserialize;
use std::process::Command;

/// Narrow view of the `cargo metadata` document.
#[derive(Debug, Deserialize)]
struct WorkspaceMetadata {
  packages: Vec<PackageDescriptor>,
}

/// One workspace package; every field other than `name` is ignored.
#[derive(Debug, Deserialize)]
struct PackageDescriptor {
  name: String,
}

/// List workspace package names, in the order cargo reports them.
pub fn workspace_package_names() -> ReleaseResult<Vec<String>> {
  let output = Command::new("cargo")
    .args([
      "metadata",
      "--format-version",
      "1",
      "--no-deps",
      "--no-default-features",
    ])
    .output()
    .map_err(|e| anyhow::anyhow!("Failed to run cargo metadata: {}", e))?;

  if !output.status.success() {
    return Err(ReleaseError::CommandFailed {
      command: "cargo metadata".to_string(),
      detail: Some(String::from_utf8_lossy(&output.stderr).trim().to_string()),
    });
  }

  let metadata: WorkspaceMetadata = serde_json::from_slice(&output.stdout)?;

  Ok(metadata.packages.into_iter().map(|pkg| pkg.name).collect())
}
