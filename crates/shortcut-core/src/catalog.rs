//! Application context tying the record store to its file.
//!
//! A presentation layer (the CLI here, a window elsewhere) owns one
//! `ShortcutCatalog` and calls it for everything: each mutation is followed by
//! a save, and each call returns what the caller needs to re-render.

use crate::error::Result;
use crate::persistence::{SaveOutcome, ShortcutFile};
use crate::search::QueryScope;
use crate::store::ShortcutStore;
use crate::types::{IdGenerator, Shortcut, ShortcutDraft, ShortcutId};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Result of a catalogue mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogUpdate {
    /// Full listing after the change, in insertion order
    pub listing: Vec<Shortcut>,

    /// Identifier the change applied to, if any entry was affected
    pub affected: Option<ShortcutId>,

    /// What happened when the change was written to disk
    pub saved: SaveOutcome,
}

impl CatalogUpdate {
    /// True if an entry was added, removed or edited
    pub fn changed(&self) -> bool {
        self.affected.is_some()
    }
}

/// The live store plus the file it is persisted to.
#[derive(Debug)]
pub struct ShortcutCatalog {
    store: ShortcutStore,
    file: ShortcutFile,
}

impl ShortcutCatalog {
    /// Load the catalogue from `file`. Unreadable data yields an empty catalogue.
    pub fn open(file: ShortcutFile) -> Self {
        let store = file.load();
        Self::from_parts(store, file)
    }

    /// Like [`open`](Self::open) with a custom identifier source.
    pub fn open_with(file: ShortcutFile, id_source: Box<dyn IdGenerator>) -> Self {
        let store = file.load_with(id_source);
        Self::from_parts(store, file)
    }

    /// Load the catalogue from `file`, failing on unreadable data.
    pub fn try_open(file: ShortcutFile) -> Result<Self> {
        let store = file.try_load()?;
        Ok(Self::from_parts(store, file))
    }

    /// Wrap an existing store and file handle without any I/O.
    pub fn from_parts(store: ShortcutStore, file: ShortcutFile) -> Self {
        info!(
            path = %file.path().display(),
            entries = store.len(),
            "Catalogue ready"
        );
        ShortcutCatalog { store, file }
    }

    /// Read-only access to the store
    pub fn store(&self) -> &ShortcutStore {
        &self.store
    }

    /// Where the catalogue is saved
    pub fn current_path(&self) -> &Path {
        self.file.path()
    }

    /// The full listing, copied
    pub fn listing(&self) -> Vec<Shortcut> {
        self.store.entries().to_vec()
    }

    /// Validate `draft`, add it, and save.
    ///
    /// Fails only on validation; a failed save is reported in the update.
    #[instrument(skip_all)]
    pub fn create(&mut self, draft: ShortcutDraft) -> Result<CatalogUpdate> {
        draft.validate()?;
        let id = self.store.add(draft).id().clone();
        Ok(self.persisted(Some(id)))
    }

    /// Remove the entry with `id` and save. Unknown ids are not an error.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&mut self, id: &ShortcutId) -> CatalogUpdate {
        let affected = self.store.remove(id).then(|| id.clone());
        if affected.is_none() {
            warn!("No shortcut with this id");
        }
        self.persisted(affected)
    }

    /// Validate `draft`, overwrite the entry with `id`, and save.
    #[instrument(skip_all, fields(id = %id))]
    pub fn edit(&mut self, id: &ShortcutId, draft: ShortcutDraft) -> Result<CatalogUpdate> {
        draft.validate()?;
        let affected = self.store.update(id, draft).then(|| id.clone());
        if affected.is_none() {
            warn!("No shortcut with this id");
        }
        Ok(self.persisted(affected))
    }

    /// Matching entries, copied, in insertion order. Changes nothing.
    pub fn query(&self, scope: QueryScope, text: &str) -> Vec<Shortcut> {
        self.store
            .query_scope(scope, text)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Point persistence at `path` and immediately save the current catalogue there.
    pub fn relocate(&mut self, path: impl AsRef<Path>) -> SaveOutcome {
        info!(to = %path.as_ref().display(), "Relocating catalogue");
        self.file.set_path(path);
        self.file.save(&self.store)
    }

    /// Distinct application names starting with `prefix`, for completing a form field.
    pub fn application_suggestions(&self, prefix: &str) -> Vec<String> {
        self.store
            .application_suggestions(prefix)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn persisted(&self, affected: Option<ShortcutId>) -> CatalogUpdate {
        // Saved even when nothing changed, so the file always mirrors the store.
        let saved = self.file.save(&self.store);
        CatalogUpdate {
            listing: self.listing(),
            affected,
            saved,
        }
    }
}
