//! Error types for Shortcut List core operations.
//!
//! This module defines well-structured error types using `thiserror` for
//! library-level errors, while the command-line shell uses `anyhow` for
//! convenient error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ShortcutError
pub type Result<T> = std::result::Result<T, ShortcutError>;

/// Core error types for Shortcut List operations.
///
/// Persistence failures only surface through the `try_*` functions; the
/// default `save`/`load` paths recover locally and log instead.
#[derive(Error, Debug)]
pub enum ShortcutError {
    // === Validation Errors ===
    /// A required text field was empty when building an entry
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    // === Query Errors ===
    /// A scope selector string did not name a known scope
    #[error("unknown search scope: {name} (expected all, application or feature)")]
    InvalidScope { name: String },

    // === Persistence Errors ===
    /// The home/profile directory could not be determined
    #[error("could not determine a data directory for {purpose}")]
    DataDirUnavailable { purpose: &'static str },

    /// The shortcut document exists but could not be parsed
    #[error("shortcut file {path} is malformed: {reason}")]
    MalformedDocument { path: PathBuf, reason: String },

    // === Configuration Errors ===
    /// Configuration file parsing failed
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    // === I/O Errors ===
    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// Serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ShortcutError {
    /// Returns true if this error should be reported back to whoever typed the input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShortcutError::MissingField { .. } | ShortcutError::InvalidScope { .. }
        )
    }

    /// Create a malformed-document error
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ShortcutError::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ShortcutError {
    fn from(err: serde_json::Error) -> Self {
        ShortcutError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        let err = ShortcutError::MissingField {
            field: "shortcut_key",
        };
        assert!(err.is_validation());

        let err: ShortcutError = "keys".parse::<crate::search::QueryScope>().unwrap_err();
        assert!(err.is_validation());

        let err = ShortcutError::malformed("/tmp/shortcuts.json", "expected value");
        assert!(!err.is_validation());

        let err = ShortcutError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_display() {
        let err = ShortcutError::InvalidScope {
            name: "keys".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown search scope: keys (expected all, application or feature)"
        );
    }
}
