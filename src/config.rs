//! Run configuration resolved from the command line

/// Crate names always kept out of the plan.
///
/// TODO: drop ruby_tool once its release pipeline works again.
const DEFAULT_EXCLUDES: &[&str] = &["ruby_tool"];

/// Immutable options for one release run.
#[derive(Debug, Clone)]
pub struct Config {
  /// Bump strategy forwarded verbatim to cargo-release.
  pub bump: String,

  /// Optional crate-name suffix filter.
  pub release_type: Option<String>,

  /// Explicit plan source; bypasses the workspace query when non-empty.
  pub packages: Vec<String>,

  /// Crate names removed from the plan, defaults included.
  pub exclude: Vec<String>,
}

impl Config {
  /// Build the configuration, folding the default exclusions into the
  /// operator-supplied ones.
  pub fn new(
    bump: String,
    release_type: Option<String>,
    packages: Vec<String>,
    mut exclude: Vec<String>,
  ) -> Self {
    exclude.extend(DEFAULT_EXCLUDES.iter().map(|name| (*name).to_string()));

    Self {
      bump,
      release_type,
      packages,
      exclude,
    }
  }
}
