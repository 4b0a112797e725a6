//! Error types for liftoff with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and
//! provides contextual help messages to users. The loader surfaces exactly
//! two error families: a source that cannot be located or read, and a
//! document that does not match the expected shape. Everything else is a
//! generic message with optional context.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for liftoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config missing, malformed, invalid args)
  User = 1,
  /// System error (I/O, subprocess)
  System = 2,
  /// Validation failure (checks failed)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for liftoff
#[derive(Debug)]
pub enum LiftoffError {
  /// Configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl LiftoffError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    LiftoffError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      LiftoffError::Message { message, context, help } => LiftoffError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      LiftoffError::Config(_) => ExitCode::User,
      LiftoffError::Io(_) => ExitCode::System,
      LiftoffError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      LiftoffError::Config(e) => e.help_message(),
      LiftoffError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for LiftoffError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LiftoffError::Config(e) => write!(f, "{}", e),
      LiftoffError::Io(e) => write!(f, "I/O error: {}", e),
      LiftoffError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for LiftoffError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      LiftoffError::Io(e) => Some(e),
      LiftoffError::Config(ConfigError::Unreadable { source, .. }) => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for LiftoffError {
  fn from(err: io::Error) -> Self {
    LiftoffError::Io(err)
  }
}

impl From<String> for LiftoffError {
  fn from(msg: String) -> Self {
    LiftoffError::message(msg)
  }
}

impl From<&str> for LiftoffError {
  fn from(msg: &str) -> Self {
    LiftoffError::message(msg)
  }
}

impl From<ConfigError> for LiftoffError {
  fn from(err: ConfigError) -> Self {
    LiftoffError::Config(err)
  }
}

impl From<serde_json::Error> for LiftoffError {
  fn from(err: serde_json::Error) -> Self {
    LiftoffError::message(format!("JSON error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for LiftoffError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    LiftoffError::message(format!("UTF-8 conversion error: {}", err))
  }
}

/// Convert anyhow::Error to LiftoffError (test helpers and subprocess glue)
impl From<anyhow::Error> for LiftoffError {
  fn from(err: anyhow::Error) -> Self {
    LiftoffError::message(err.to_string())
  }
}

/// Configuration-related errors
///
/// `NotFound` and `Unreadable` are the two faces of an unreadable source
/// (nothing to read vs. a read that failed); `Malformed` covers every
/// structural violation after the bytes were read.
#[derive(Debug)]
pub enum ConfigError {
  /// No release configuration found under the search root
  NotFound { search_root: PathBuf },

  /// Source exists (or was named explicitly) but could not be read
  Unreadable { path: PathBuf, source: io::Error },

  /// Document was read but does not match the expected shape
  Malformed { path: PathBuf, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Run `liftoff init` to create a release configuration file.".to_string())
      }
      ConfigError::Malformed { .. } => Some(
        "The document must be an object with `branches`, `repositoryUrl` and `plugins` fields.".to_string(),
      ),
      ConfigError::Unreadable { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { search_root } => {
        write!(
          f,
          "No release configuration found.\nSearched under: {}",
          search_root.display()
        )
      }
      ConfigError::Unreadable { path, source } => {
        write!(f, "Cannot read release configuration {}: {}", path.display(), source)
      }
      ConfigError::Malformed { path, reason } => {
        write!(f, "Malformed release configuration {}: {}", path.display(), reason)
      }
    }
  }
}

/// Result type alias for liftoff
pub type LiftoffResult<T> = Result<T, LiftoffError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> LiftoffResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> LiftoffResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<LiftoffError>,
{
  fn context(self, ctx: impl Into<String>) -> LiftoffResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> LiftoffResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &LiftoffError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
