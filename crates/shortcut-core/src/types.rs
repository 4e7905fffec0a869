//! Core data types for Shortcut List.
//!
//! This module defines the catalogued entry, its identifier, the input used to
//! create or edit an entry, and the pluggable identifier source. These types
//! are designed to be:
//!
//! - **Serializable**: `Shortcut` maps one-to-one onto a persisted JSON object
//! - **Identity-stable**: an entry's `id` cannot change once it exists
//! - **Testable**: identifier generation is injected, not global

use crate::error::{Result, ShortcutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque unique identifier for a catalogued shortcut.
///
/// Generated once when the entry is created and never reused. The value is a
/// plain string on disk so that documents written by other tools load as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutId(String);

impl ShortcutId {
    /// Create an identifier from a string
    pub fn new(id: impl Into<String>) -> Self {
        ShortcutId(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ShortcutId {
    fn from(s: String) -> Self {
        ShortcutId(s)
    }
}

impl From<&str> for ShortcutId {
    fn from(s: &str) -> Self {
        ShortcutId(s.to_string())
    }
}

/// A single catalogued keyboard shortcut.
///
/// The three text fields are free-form display strings. The `id` is private so
/// that nothing outside the crate can rewrite an entry's identity; edits go
/// through [`ShortcutStore::update`](crate::ShortcutStore::update), which keeps
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    /// Unique identifier
    id: ShortcutId,

    /// Application the shortcut belongs to (e.g., "Visual Studio Code")
    pub application_name: String,

    /// What the shortcut does (e.g., "Comment line")
    pub feature_description: String,

    /// Key combination as typed by the user (e.g., "Cmd+/")
    pub shortcut_key: String,
}

impl Shortcut {
    /// Build an entry from an already-assigned identifier and its text fields.
    pub(crate) fn from_parts(id: ShortcutId, draft: ShortcutDraft) -> Self {
        Shortcut {
            id,
            application_name: draft.application_name,
            feature_description: draft.feature_description,
            shortcut_key: draft.shortcut_key,
        }
    }

    /// Get the entry's identifier
    pub fn id(&self) -> &ShortcutId {
        &self.id
    }

    /// Replace the three text fields, keeping the identifier.
    pub(crate) fn overwrite(&mut self, draft: ShortcutDraft) {
        self.application_name = draft.application_name;
        self.feature_description = draft.feature_description;
        self.shortcut_key = draft.shortcut_key;
    }

    /// The text fields as an `(application, feature, key)` triple.
    pub fn triple(&self) -> (&str, &str, &str) {
        (
            &self.application_name,
            &self.feature_description,
            &self.shortcut_key,
        )
    }
}

/// The text content of a shortcut, without an identifier.
///
/// This is what a form submits. The store accepts it as-is; callers that take
/// user input run [`validate`](ShortcutDraft::validate) first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShortcutDraft {
    pub application_name: String,
    pub feature_description: String,
    pub shortcut_key: String,
}

impl ShortcutDraft {
    /// Create a draft from the three text fields
    pub fn new(
        application_name: impl Into<String>,
        feature_description: impl Into<String>,
        shortcut_key: impl Into<String>,
    ) -> Self {
        ShortcutDraft {
            application_name: application_name.into(),
            feature_description: feature_description.into(),
            shortcut_key: shortcut_key.into(),
        }
    }

    /// Check that all three fields are present.
    ///
    /// A field consisting only of whitespace counts as missing.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("application_name", &self.application_name),
            ("feature_description", &self.feature_description),
            ("shortcut_key", &self.shortcut_key),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ShortcutError::MissingField { field });
            }
        }
        Ok(())
    }
}

impl From<&Shortcut> for ShortcutDraft {
    fn from(shortcut: &Shortcut) -> Self {
        ShortcutDraft {
            application_name: shortcut.application_name.clone(),
            feature_description: shortcut.feature_description.clone(),
            shortcut_key: shortcut.shortcut_key.clone(),
        }
    }
}

/// Source of fresh shortcut identifiers.
///
/// Every call must return a value never returned before by the same generator.
pub trait IdGenerator: Send + Sync {
    /// Produce a new, non-empty identifier.
    ///
    /// The store retries when an id is empty or already taken, and switches to
    /// [`UuidGenerator`] if the generator keeps failing.
    fn new_id(&self) -> String;
}

/// Random UUID v4 identifiers. The default generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic identifiers of the form `<prefix>-<n>`, counting from 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator producing `<prefix>-1`, `<prefix>-2`, ...
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIdGenerator {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_validation() {
        assert!(ShortcutDraft::new("Chrome", "New Tab", "Cmd+T")
            .validate()
            .is_ok());

        let err = ShortcutDraft::new("", "New Tab", "Cmd+T")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ShortcutError::MissingField {
                field: "application_name"
            }
        ));

        let err = ShortcutDraft::new("Chrome", "New Tab", "   ")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ShortcutError::MissingField {
                field: "shortcut_key"
            }
        ));
    }

    #[test]
    fn test_shortcut_serializes_four_fields() {
        let shortcut = Shortcut::from_parts(
            ShortcutId::new("abc"),
            ShortcutDraft::new("Finder", "新規フォルダ", "Shift+Cmd+N"),
        );
        let value = serde_json::to_value(&shortcut).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["id"], "abc");
        assert_eq!(object["application_name"], "Finder");
        assert_eq!(object["feature_description"], "新規フォルダ");
        assert_eq!(object["shortcut_key"], "Shift+Cmd+N");
    }

    #[test]
    fn test_overwrite_keeps_id() {
        let mut shortcut = Shortcut::from_parts(
            ShortcutId::new("keep-me"),
            ShortcutDraft::new("Chrome", "New Tab", "Cmd+T"),
        );
        shortcut.overwrite(ShortcutDraft::new("Safari", "New Window", "Cmd+N"));

        assert_eq!(shortcut.id().as_str(), "keep-me");
        assert_eq!(shortcut.triple(), ("Safari", "New Window", "Cmd+N"));
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new("t");
        assert_eq!(ids.new_id(), "t-1");
        assert_eq!(ids.new_id(), "t-2");
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let ids = UuidGenerator;
        let a = ids.new_id();
        let b = ids.new_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_shortcut_id() {
        let id = ShortcutId::from("xyz");
        assert_eq!(id.as_str(), "xyz");
        assert_eq!(format!("{}", id), "xyz");
    }
}
