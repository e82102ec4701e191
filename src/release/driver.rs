//! Sequential release loop over the approved plan

use crate::error::{ReleaseError, ReleaseResult};
use crate::ui;
use std::process::Command;
use std::thread;
use std::time::Duration;

/// Cooldown between releases. Each crate must be tagged as its own event so
/// the per-tag release workflow fires once per plugin; tagging two crates in
/// the same instant breaks it.
pub const RELEASE_DELAY: Duration = Duration::from_secs(3);

/// Release every crate in `plan`, in order, stopping at the first failure.
///
/// Crates released before a failure stay released; there is no rollback.
pub fn release_all(bump: &str, plan: &[String], delay: Duration) -> ReleaseResult<()> {
  release_each(bump, plan, delay, release_package)
}

/// Loop core, generic over the per-crate runner.
fn release_each(
  bump: &str,
  plan: &[String],
  delay: Duration,
  mut run: impl FnMut(&str, &str) -> ReleaseResult<()>,
) -> ReleaseResult<()> {
  for (idx, package) in plan.iter().enumerate() {
    println!(
      "📦 [{}/{}] Releasing {}",
      idx + 1,
      plan.len(),
      ui::paint(ui::PLUGIN, package)
    );

    run(bump, package)?;

    println!();

    if idx + 1 < plan.len() {
      thread::sleep(delay);
    }
  }

  println!(
    "🎉 Released {} plugin(s)!",
    ui::paint(ui::COUNT, &plan.len().to_string())
  );

  Ok(())
}

/// Run `cargo release` for one crate, streaming its output to the operator.
fn release_package(bump: &str, package: &str) -> ReleaseResult<()> {
  let status = Command::new("cargo")
    .args([
      "release",
      bump,
      "--no-publish",
      "--no-confirm",
      "--execute",
      "-p",
      package,
    ])
    .status()
    .map_err(|e| anyhow::anyhow!("Failed to run cargo release: {}", e))?;

  if !status.success() {
    return Err(ReleaseError::CommandFailed {
      command: format!("cargo release -p {}", package),
      detail: None,
    });
  }

  Ok(())
}
