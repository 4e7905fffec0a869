//! Persistence layer for the shortcut catalogue.
//!
//! This module saves and loads a [`ShortcutStore`] to/from a single JSON
//! document. The on-disk format is designed for:
//!
//! - Hand-editing: pretty-printed UTF-8, non-ASCII text written literally
//! - Atomic-enough writes: write to a sibling temp file, then rename
//! - Tolerant loading: a missing file is an empty catalogue, and entries
//!   without an `id` get one on load
//!
//! ## File Format
//!
//! ```text
//! [
//!   {
//!     "id": "0b6d4f0e-...",
//!     "application_name": "Chrome",
//!     "feature_description": "New Tab",
//!     "shortcut_key": "Cmd+T"
//!   }
//! ]
//! ```
//!
//! Field order is not significant. Unknown fields are ignored.

use crate::error::{Result, ShortcutError};
use crate::store::ShortcutStore;
use crate::types::{IdGenerator, Shortcut, ShortcutDraft, ShortcutId, UuidGenerator};
use directories::BaseDirs;
use serde::Deserialize;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Directory created under the home directory for the default location
pub const DEFAULT_DIR_NAME: &str = "ShortcutList";
/// File name used for the default location
pub const DEFAULT_FILE_NAME: &str = "shortcuts.json";

/// One entry as read from disk; `id` may be absent in hand-written files.
#[derive(Debug, Deserialize)]
struct StoredShortcut {
    #[serde(default)]
    id: Option<String>,
    application_name: String,
    feature_description: String,
    shortcut_key: String,
}

impl StoredShortcut {
    fn into_parts(self) -> (Option<ShortcutId>, ShortcutDraft) {
        (
            self.id.map(ShortcutId::from),
            ShortcutDraft {
                application_name: self.application_name,
                feature_description: self.feature_description,
                shortcut_key: self.shortcut_key,
            },
        )
    }
}

/// Result of a [`ShortcutFile::save`].
///
/// Saving never returns an error; a failure is reported here with a
/// human-readable reason and also logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The document was written
    Saved { path: PathBuf, entries: usize },

    /// The document could not be written
    Failed { path: PathBuf, reason: String },
}

impl SaveOutcome {
    /// True if the document was written
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }

    /// The destination that was attempted
    pub fn path(&self) -> &Path {
        match self {
            SaveOutcome::Saved { path, .. } | SaveOutcome::Failed { path, .. } => path,
        }
    }

    /// Diagnostic text for a failed save
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            SaveOutcome::Saved { .. } => None,
            SaveOutcome::Failed { reason, .. } => Some(reason),
        }
    }
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::Saved { path, entries } => {
                write!(f, "saved {} shortcuts to {}", entries, path.display())
            }
            SaveOutcome::Failed { path, reason } => {
                write!(f, "failed to save to {}: {}", path.display(), reason)
            }
        }
    }
}

/// Reads and writes the catalogue document at a configurable path.
///
/// No file handle is held between calls.
///
/// ## Example
///
/// ```rust,ignore
/// use shortcut_core::{ShortcutDraft, ShortcutFile};
///
/// let file = ShortcutFile::at_default_location()?;
/// let mut store = file.load();
/// store.add(ShortcutDraft::new("Chrome", "New Tab", "Cmd+T"));
/// if !file.save(&store).is_saved() {
///     eprintln!("could not save");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutFile {
    /// Destination of the JSON document
    path: PathBuf,
}

impl ShortcutFile {
    /// Create a handle for the document at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        ShortcutFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The default document path: `<home>/ShortcutList/shortcuts.json`.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = BaseDirs::new().ok_or(ShortcutError::DataDirUnavailable {
            purpose: "the shortcut file",
        })?;
        Ok(dirs
            .home_dir()
            .join(DEFAULT_DIR_NAME)
            .join(DEFAULT_FILE_NAME))
    }

    /// Handle for the default path, creating its directory if absent.
    pub fn at_default_location() -> Result<Self> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self::new(path))
    }

    /// Get the current destination.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point later loads and saves at `path`. Does no I/O.
    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        debug!(from = %self.path.display(), to = %path.display(), "Changing shortcut file");
        self.path = path;
    }

    /// Check if the document exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the path to the temporary file used during save.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Save the store, reporting failure through the returned outcome.
    pub fn save(&self, store: &ShortcutStore) -> SaveOutcome {
        match self.try_save(store) {
            Ok(entries) => SaveOutcome::Saved {
                path: self.path.clone(),
                entries,
            },
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to save shortcuts");
                SaveOutcome::Failed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Save the store, returning the number of entries written.
    ///
    /// Uses atomic write (write to temp, then rename) so a failed write leaves
    /// the previous document in place.
    pub fn try_save(&self, store: &ShortcutStore) -> Result<usize> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let entries = store.entries();
        info!(
            path = %self.path.display(),
            entries = entries.len(),
            "Saving shortcuts"
        );

        let temp_path = self.temp_path();
        let written = Self::write_document(&temp_path, entries)
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(ShortcutError::from));

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        debug!(entries = entries.len(), "Shortcuts saved successfully");
        Ok(entries.len())
    }

    fn write_document(path: &Path, entries: &[Shortcut]) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        Ok(())
    }

    /// Load the store, assigning UUIDs to entries without one.
    ///
    /// Falls back to an empty store if the document is unreadable or
    /// malformed. Use [`try_load`](Self::try_load) to see the error instead.
    pub fn load(&self) -> ShortcutStore {
        self.load_with(Box::new(UuidGenerator))
    }

    /// Like [`load`](Self::load) with a custom identifier source.
    pub fn load_with(&self, id_source: Box<dyn IdGenerator>) -> ShortcutStore {
        match self.read_document() {
            Ok(stored) => Self::hydrate(stored, id_source),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to load shortcuts, starting with an empty catalogue"
                );
                ShortcutStore::with_id_generator(id_source)
            }
        }
    }

    /// Load the store, returning an error for unreadable or malformed data.
    ///
    /// A missing or empty document is still an empty store, not an error.
    pub fn try_load(&self) -> Result<ShortcutStore> {
        self.try_load_with(Box::new(UuidGenerator))
    }

    /// Like [`try_load`](Self::try_load) with a custom identifier source.
    pub fn try_load_with(&self, id_source: Box<dyn IdGenerator>) -> Result<ShortcutStore> {
        let stored = self.read_document()?;
        Ok(Self::hydrate(stored, id_source))
    }

    fn read_document(&self) -> Result<Vec<StoredShortcut>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Shortcut file not found, starting empty");
            return Ok(Vec::new());
        }

        info!(path = %self.path.display(), "Loading shortcuts");
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| ShortcutError::malformed(&self.path, e.to_string()))
    }

    fn hydrate(stored: Vec<StoredShortcut>, id_source: Box<dyn IdGenerator>) -> ShortcutStore {
        let mut store = ShortcutStore::with_id_generator(id_source);
        let mut healed = 0usize;
        for record in stored {
            let (id, draft) = record.into_parts();
            if store.restore(id, draft) {
                healed += 1;
            }
        }
        if healed > 0 {
            warn!(healed, "Assigned new identifiers to entries with missing or duplicate ids");
        }
        info!(entries = store.len(), "Shortcuts loaded");
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SequentialIdGenerator;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn make_test_store() -> ShortcutStore {
        let mut store =
            ShortcutStore::with_id_generator(Box::new(SequentialIdGenerator::new("t")));
        store.add(ShortcutDraft::new("Chrome", "New Tab", "Cmd+T"));
        store.add(ShortcutDraft::new("Terminal", "Clear", "Cmd+K"));
        store.add(ShortcutDraft::new("メモ", "新規メモ", "⌘N"));
        store
    }

    fn triples(store: &ShortcutStore) -> HashSet<(String, String, String)> {
        store
            .list()
            .map(|s| {
                (
                    s.application_name.clone(),
                    s.feature_description.clone(),
                    s.shortcut_key.clone(),
                )
            })
            .collect()
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = ShortcutFile::new(temp_dir.path().join("shortcuts.json"));
        let store = make_test_store();

        let outcome = file.save(&store);
        assert!(outcome.is_saved());
        assert_eq!(outcome.failure_reason(), None);
        assert!(file.exists());

        let loaded = file.load();
        assert_eq!(triples(&loaded), triples(&store));
        assert_eq!(loaded.entries(), store.entries());
    }

    #[test]
    fn test_save_writes_exact_fields_and_literal_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let file = ShortcutFile::new(temp_dir.path().join("shortcuts.json"));
        file.try_save(&make_test_store()).unwrap();

        let text = fs::read_to_string(file.path()).unwrap();
        assert!(text.contains("新規メモ"));
        assert!(text.contains("⌘N"));
        assert!(!text.contains("\\u"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 3);
        for object in array {
            let keys: HashSet<&str> = object.as_object().unwrap().keys().map(|k| k.as_str()).collect();
            assert_eq!(
                keys,
                HashSet::from(["id", "application_name", "feature_description", "shortcut_key"])
            );
        }
        assert_eq!(array[0]["id"], "t-1");
    }

    #[test]
    fn test_save_overwrites_and_cleans_temp() {
        let temp_dir = TempDir::new().unwrap();
        let file = ShortcutFile::new(temp_dir.path().join("shortcuts.json"));

        let mut store = make_test_store();
        file.try_save(&store).unwrap();
        let first = store.entries()[0].id().clone();
        store.remove(&first);
        assert_eq!(file.try_save(&store).unwrap(), 2);

        assert_eq!(file.load().len(), 2);
        assert!(!temp_dir.path().join("shortcuts.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = ShortcutFile::new(temp_dir.path().join("nested").join("dir").join("s.json"));

        assert!(file.save(&make_test_store()).is_saved());
        assert_eq!(file.load().len(), 3);
    }

    #[test]
    fn test_save_failure_is_reported_not_raised() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, b"plain file").unwrap();
        let file = ShortcutFile::new(blocker.join("shortcuts.json"));

        let outcome = file.save(&make_test_store());
        assert!(!outcome.is_saved());
        assert!(outcome.failure_reason().is_some());
        assert_eq!(outcome.path(), file.path());
    }

    #[test]
    fn test_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let file = ShortcutFile::new(temp_dir.path().join("missing.json"));

        assert!(file.load().is_empty());
        assert!(file.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shortcuts.json");
        fs::write(&path, "  \n").unwrap();

        assert!(ShortcutFile::new(&path).try_load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupted_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shortcuts.json");
        fs::write(&path, b"{ not valid json").unwrap();

        let file = ShortcutFile::new(&path);
        assert!(file.load().is_empty());
        assert!(matches!(
            file.try_load(),
            Err(ShortcutError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shortcuts.json");
        fs::write(
            &path,
            r#"[{"id": "1", "application_name": "Chrome", "shortcut_key": "Cmd+T"}]"#,
        )
        .unwrap();

        let file = ShortcutFile::new(&path);
        assert!(file.try_load().is_err());
        assert!(file.load().is_empty());
    }

    #[test]
    fn test_load_heals_missing_ids() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shortcuts.json");
        fs::write(
            &path,
            r#"[
                {"application_name": "Chrome", "feature_description": "New Tab", "shortcut_key": "Cmd+T"},
                {"shortcut_key": "Cmd+K", "id": "keep", "feature_description": "Clear", "application_name": "Terminal", "extra": 1}
            ]"#,
        )
        .unwrap();

        let file = ShortcutFile::new(&path);
        let store = file.load_with(Box::new(SequentialIdGenerator::new("new")));
        let entries: Vec<&Shortcut> = store.list().collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id().as_str(), "new-1");
        assert_eq!(entries[0].application_name, "Chrome");
        assert_eq!(entries[1].id().as_str(), "keep");
        assert_eq!(entries[1].triple(), ("Terminal", "Clear", "Cmd+K"));
    }

    #[test]
    fn test_round_trip_keeps_existing_ids() {
        let temp_dir = TempDir::new().unwrap();
        let file = ShortcutFile::new(temp_dir.path().join("shortcuts.json"));
        let store = make_test_store();
        file.try_save(&store).unwrap();

        let loaded = file.try_load().unwrap();
        let original: Vec<&ShortcutId> = store.list().map(|s| s.id()).collect();
        let reloaded: Vec<&ShortcutId> = loaded.list().map(|s| s.id()).collect();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_set_path_redirects_saves() {
        let temp_dir = TempDir::new().unwrap();
        let mut file = ShortcutFile::new(temp_dir.path().join("a.json"));
        file.set_path(temp_dir.path().join("b.json"));

        assert!(!temp_dir.path().join("b.json").exists());
        file.try_save(&make_test_store()).unwrap();
        assert!(!temp_dir.path().join("a.json").exists());
        assert!(temp_dir.path().join("b.json").exists());
    }

    #[test]
    fn test_default_path_shape() {
        if let Ok(path) = ShortcutFile::default_path() {
            assert!(path.ends_with(Path::new(DEFAULT_DIR_NAME).join(DEFAULT_FILE_NAME)));
        }
    }
}
