//! Integration tests for plan resolution

use crate::helpers::StubWorkspace;
use anyhow::Result;

#[test]
fn workspace_query_drops_common_crates() -> Result<()> {
  let ws = StubWorkspace::new(&["alpha_tool", "common_core", "beta_tool"])?;

  let output = ws.run(&[], "y\n")?;

  assert!(output.status.success());
  assert_eq!(ws.released_packages(), ["alpha_tool", "beta_tool"]);
  Ok(())
}

#[test]
fn explicit_packages_bypass_the_metadata_query() -> Result<()> {
  // The stub workspace reports a different crate; if the tool queried it,
  // the released set would not match the explicit list.
  let ws = StubWorkspace::new(&["ignored_tool"])?;

  let output = ws.run(&["-p", "x", "-p", "y", "-x", "y"], "y\n")?;

  assert!(output.status.success());
  assert_eq!(ws.released_packages(), ["x"]);
  assert!(
    ws.cargo_invocations()
      .iter()
      .all(|line| !line.starts_with("metadata")),
    "cargo metadata must not be invoked when -p is given"
  );
  Ok(())
}

#[test]
fn type_suffix_filters_the_workspace_list() -> Result<()> {
  let ws = StubWorkspace::new(&["alpha_tool", "beta_lib", "gamma_tool"])?;

  let output = ws.run(&["--type", "tool"], "y\n")?;

  assert!(output.status.success());
  assert_eq!(ws.released_packages(), ["alpha_tool", "gamma_tool"]);
  Ok(())
}

#[test]
fn default_exclusion_covers_the_broken_plugin() -> Result<()> {
  let ws = StubWorkspace::new(&["ruby_tool", "alpha_tool"])?;

  let output = ws.run(&[], "y\n")?;

  assert!(output.status.success());
  assert_eq!(ws.released_packages(), ["alpha_tool"]);
  Ok(())
}

#[test]
fn empty_plan_fails_before_any_release() -> Result<()> {
  let ws = StubWorkspace::new(&["common_core", "common_api"])?;

  let output = ws.run(&[], "y\n")?;

  assert!(!output.status.success());
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(
    stderr.contains("No plugins to release"),
    "unexpected stderr: {stderr}"
  );
  assert!(ws.released_packages().is_empty());
  Ok(())
}

#[test]
fn unknown_flags_fail_with_a_usage_error() -> Result<()> {
  let ws = StubWorkspace::new(&["alpha_tool"])?;

  let output = ws.run(&["--frobnicate"], "")?;

  assert!(!output.status.success());
  assert!(ws.cargo_invocations().is_empty());
  Ok(())
}
