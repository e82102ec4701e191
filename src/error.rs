//! Error types for plugin-release with exit codes and contextual help
//!
//! Everything here is "stop and surface": no error is retried, and a failure
//! mid-run leaves already-released crates released.

use std::fmt;
use std::io;

/// Exit codes for plugin-release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (empty plan, over-aggressive filters)
  User = 1,
  /// System error (external command, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for plugin-release
#[derive(Debug)]
pub enum ReleaseError {
  /// An external command exited non-zero
  CommandFailed {
    command: String,
    detail: Option<String>,
  },

  /// The resolved plan contained no crates
  NoPackages,

  /// I/O errors
  Io(io::Error),

  /// Generic error with message
  Message(String),
}

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message(msg.into())
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::NoPackages => ExitCode::User,
      ReleaseError::CommandFailed { .. } | ReleaseError::Io(_) | ReleaseError::Message(_) => {
        ExitCode::System
      }
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::NoPackages => Some(
        "Relax the --type or --exclude filters, or name crates explicitly with -p.".to_string(),
      ),
      ReleaseError::CommandFailed { command, .. } => {
        Some(format!("Re-run `{}` by hand to see its full output.", command))
      }
      _ => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::CommandFailed { command, detail } => {
        write!(f, "Command failed: {}", command)?;
        if let Some(detail) = detail {
          if !detail.is_empty() {
            write!(f, "\n{}", detail)?;
          }
        }
        Ok(())
      }
      ReleaseError::NoPackages => write!(f, "No plugins to release!"),
      ReleaseError::Io(e) => write!(f, "I/O error: {}", e),
      ReleaseError::Message(message) => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io(err)
  }
}

impl From<String> for ReleaseError {
  fn from(msg: String) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<&str> for ReleaseError {
  fn from(msg: &str) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<serde_json::Error> for ReleaseError {
  fn from(err: serde_json::Error) -> Self {
    ReleaseError::message(format!("Failed to parse cargo metadata output: {}", err))
  }
}

impl From<anyhow::Error> for ReleaseError {
  fn from(err: anyhow::Error) -> Self {
    ReleaseError::message(err.to_string())
  }
}

/// Result type alias for plugin-release
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
