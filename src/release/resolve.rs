//! Resolve which plugin crates get released this run

use crate::cargo::metadata;
use crate::config::Config;
use crate::error::{ReleaseError, ReleaseResult};

/// Substring marking shared internal crates. Common crates are not plugins
/// and are never released on their own.
const COMMON_MARKER: &str = "common";

/// Produce the ordered release plan for this run.
///
/// Explicit `--packages` are taken verbatim and the workspace is not queried
/// at all; otherwise candidates come from `cargo metadata` in the order cargo
/// reports them. Filtering is stable, so plan order always matches source
/// order.
pub fn resolve_plan(config: &Config) -> ReleaseResult<Vec<String>> {
  let candidates = if config.packages.is_empty() {
    metadata::workspace_package_names()?
  } else {
    config.packages.clone()
  };

  let plan = apply_filters(candidates, config);

  if plan.is_empty() {
    return Err(ReleaseError::NoPackages);
  }

  Ok(plan)
}

/// Apply the type-suffix, common-crate and exclusion filters, preserving
/// candidate order.
fn apply_filters(candidates: Vec<String>, config: &Config) -> Vec<String> {
  candidates
    .into_iter()
    .filter(|name| {
      config
        .release_type
        .as_deref()
        .is_none_or(|suffix| name.ends_with(suffix))
    })
    .filter(|name| !name.contains(COMMON_MARKER))
    .filter(|name| !config.exclude.iter().any(|excluded| excluded == name))
    .collect()
}
