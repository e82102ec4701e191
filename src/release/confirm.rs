//! Operator confirmation of the release plan

use crate::error::ReleaseResult;
use crate::ui;
use std::io::{self, Write};

/// Ask the operator to approve the plan. Returns `false` on decline.
///
/// Only a literal `n` (any case) declines; every other answer, including an
/// empty line, approves. Interactive use only; there is no timeout.
pub fn confirm_plan(bump: &str, plan: &[String]) -> ReleaseResult<bool> {
  let names: Vec<String> = plan
    .iter()
    .map(|name| ui::paint(ui::PLUGIN, name))
    .collect();

  print!(
    "🚀 Release ({}) plugins {}? [Y/n] ",
    ui::paint(ui::BUMP, bump),
    names.join(", ")
  );
  io::stdout().flush()?;

  let mut answer = String::new();
  io::stdin()
    .read_line(&mut answer)
    .map_err(|e| anyhow::anyhow!("Failed to read confirmation input: {}", e))?;

  Ok(!is_declined(&answer))
}

/// Whether an answer line cancels the run.
pub fn is_declined(answer: &str) -> bool {
  answer.trim().eq_ignore_ascii_case("n")
}
