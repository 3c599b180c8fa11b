//! Error types for relver with contextual messages and exit codes
//!
//! Errors fall into two classes with different exit behavior:
//!
//! - **Structural errors** (`RelverError::Decode`, `Json`, `Io`, `Message`):
//!   corrupted state, malformed input, or a caller bug. These abort the
//!   command with a clear message.
//! - **Policy rejections** (`RelverError::Rejected`): an invalid phase
//!   transition or a version that would regress shipment history. The
//!   rejection itself travels as a `valid: false` result value; commands
//!   raise `Rejected` only to carry the non-zero exit status after the
//!   result has been printed.

use std::fmt;
use std::io;

/// Exit codes for relver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid args, malformed JSON, unparseable state blob)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Policy rejection (failed bump or validate result)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relver
#[derive(Debug)]
pub enum RelverError {
  /// Persisted state blob could not be decoded
  Decode(DecodeError),

  /// JSON (de)serialization errors
  Json(serde_json::Error),

  /// I/O errors
  Io(io::Error),

  /// Policy rejection already reported as a `valid: false` result
  Rejected { reason: String },

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl RelverError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    RelverError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      RelverError::Message { message, context, help } => RelverError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      RelverError::Io(e) => RelverError::Message {
        message: format!("I/O error: {}", e),
        context: Some(ctx_str),
        help: None,
      },
      RelverError::Json(e) => RelverError::Message {
        message: format!("JSON error: {}", e),
        context: Some(ctx_str),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      RelverError::Decode(_) => ExitCode::User,
      RelverError::Json(_) => ExitCode::User,
      RelverError::Io(_) => ExitCode::System,
      RelverError::Rejected { .. } => ExitCode::Validation,
      RelverError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      RelverError::Decode(e) => e.help_message(),
      RelverError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for RelverError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RelverError::Decode(e) => write!(f, "{}", e),
      RelverError::Json(e) => write!(f, "JSON error: {}", e),
      RelverError::Io(e) => write!(f, "I/O error: {}", e),
      RelverError::Rejected { reason } => write!(f, "{}", reason),
      RelverError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for RelverError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RelverError::Io(e) => Some(e),
      RelverError::Json(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for RelverError {
  fn from(err: io::Error) -> Self {
    RelverError::Io(err)
  }
}

impl From<serde_json::Error> for RelverError {
  fn from(err: serde_json::Error) -> Self {
    RelverError::Json(err)
  }
}

impl From<String> for RelverError {
  fn from(msg: String) -> Self {
    RelverError::message(msg)
  }
}

impl From<&str> for RelverError {
  fn from(msg: &str) -> Self {
    RelverError::message(msg)
  }
}

impl From<DecodeError> for RelverError {
  fn from(err: DecodeError) -> Self {
    RelverError::Decode(err)
  }
}

/// Errors from decoding a persisted version-state blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
  /// No state marker found in the supplied text
  MarkerNotFound,

  /// Marker found but the field payload is malformed
  MalformedState { reason: String },

  /// Phase (or legacy stage) token is not recognized
  UnknownPhase { value: String },

  /// Pending token is not one of none/prerelease/stable
  UnknownPending { value: String },
}

impl DecodeError {
  fn help_message(&self) -> Option<String> {
    match self {
      DecodeError::MarkerNotFound => Some(
        "The text does not contain a version-state marker. Omit --notes to derive a fresh state from release history instead.".to_string(),
      ),
      DecodeError::UnknownPhase { .. } => {
        Some("Recognized phases are pre, rc, and rtm (legacy encodings use stages pre and rtm).".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for DecodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DecodeError::MarkerNotFound => {
        write!(f, "No version-state marker found in the supplied text")
      }
      DecodeError::MalformedState { reason } => {
        write!(f, "Malformed version state: {}", reason)
      }
      DecodeError::UnknownPhase { value } => {
        write!(f, "Unknown phase in version state: '{}'", value)
      }
      DecodeError::UnknownPending { value } => {
        write!(f, "Unknown pending release tag in version state: '{}'", value)
      }
    }
  }
}

/// Result type alias for relver
pub type RelverResult<T> = Result<T, RelverError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> RelverResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> RelverResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<RelverError>,
{
  fn context(self, ctx: impl Into<String>) -> RelverResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> RelverResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &RelverError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
