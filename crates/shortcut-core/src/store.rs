//! In-memory record store for catalogued shortcuts.
//!
//! The `ShortcutStore` owns every entry and is the only thing that may change
//! them. It supports:
//!
//! - Appending new entries (identifiers come from an injected [`IdGenerator`])
//! - Removing and editing entries by identifier
//! - Listing in insertion order
//! - Case-insensitive filtering by application, by feature, or across all fields
//!
//! ## Architecture
//!
//! A `Vec<Shortcut>` holds the entries in insertion order, which is also the
//! display order. A `HashSet` of identifiers backs the "no two entries share an
//! id" invariant without a scan on every insert. Catalogues are small and
//! edited by hand, so lookups by id are a linear scan of the vector.

use crate::search::{QueryScope, ShortcutQuery};
use crate::types::{IdGenerator, Shortcut, ShortcutDraft, ShortcutId, UuidGenerator};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Attempts at the injected generator before falling back to a random UUID
const MAX_ID_ATTEMPTS: usize = 16;

/// The ordered collection of shortcuts.
///
/// Read operations hand out shared references; nothing returned from the store
/// can be used to modify it.
///
/// ## Example
///
/// ```rust
/// use shortcut_core::{ShortcutDraft, ShortcutStore};
///
/// let mut store = ShortcutStore::new();
/// store.add(ShortcutDraft::new("Chrome", "New Tab", "Cmd+T"));
/// store.add(ShortcutDraft::new("Terminal", "Clear", "Cmd+K"));
///
/// let hits = store.filter_by_application("term");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].application_name, "Terminal");
/// ```
pub struct ShortcutStore {
    /// All entries, in insertion order
    entries: Vec<Shortcut>,

    /// Identifiers currently in `entries`
    ids: HashSet<ShortcutId>,

    /// Source of identifiers for new entries
    id_source: Box<dyn IdGenerator>,
}

impl Default for ShortcutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutStore {
    /// Create a new empty store that assigns UUID identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidGenerator))
    }

    /// Create a new empty store with a custom identifier source.
    pub fn with_id_generator(id_source: Box<dyn IdGenerator>) -> Self {
        ShortcutStore {
            entries: Vec::new(),
            ids: HashSet::new(),
            id_source,
        }
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry built from `draft` and return it.
    ///
    /// The draft is not validated here. Identical content may be added any
    /// number of times; each copy gets its own identifier.
    pub fn add(&mut self, draft: ShortcutDraft) -> &Shortcut {
        let id = self.fresh_id();
        debug!(id = %id, application = %draft.application_name, "Adding shortcut");
        self.push(Shortcut::from_parts(id, draft))
    }

    /// Remove the entry with the given identifier.
    ///
    /// Returns `false` and leaves the store untouched if no entry matches.
    pub fn remove(&mut self, id: &ShortcutId) -> bool {
        if !self.ids.remove(id) {
            debug!(id = %id, "Remove ignored, no such shortcut");
            return false;
        }
        self.entries.retain(|s| s.id() != id);
        debug!(id = %id, remaining = self.entries.len(), "Removed shortcut");
        true
    }

    /// Overwrite the text fields of the entry with the given identifier.
    ///
    /// The identifier and the entry's position are kept. Returns `false` if no
    /// entry matches.
    pub fn update(&mut self, id: &ShortcutId, draft: ShortcutDraft) -> bool {
        match self.entries.iter_mut().find(|s| s.id() == id) {
            Some(entry) => {
                entry.overwrite(draft);
                debug!(id = %id, "Updated shortcut");
                true
            }
            None => false,
        }
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: &ShortcutId) -> Option<&Shortcut> {
        self.entries.iter().find(|s| s.id() == id)
    }

    /// Check if an entry with this identifier exists.
    pub fn contains(&self, id: &ShortcutId) -> bool {
        self.ids.contains(id)
    }

    /// Iterate over all entries in insertion order.
    ///
    /// Calling this again starts from the beginning.
    pub fn list(&self) -> impl Iterator<Item = &Shortcut> + '_ {
        self.entries.iter()
    }

    /// All entries in insertion order, as a slice.
    pub fn entries(&self) -> &[Shortcut] {
        &self.entries
    }

    /// Entries matching a prepared query, in insertion order.
    pub fn query(&self, query: &ShortcutQuery) -> Vec<&Shortcut> {
        if query.matches_all() {
            return self.entries.iter().collect();
        }
        self.entries.iter().filter(|s| query.matches(s)).collect()
    }

    /// Entries whose text within `scope` contains `text`, ignoring case.
    pub fn query_scope(&self, scope: QueryScope, text: &str) -> Vec<&Shortcut> {
        self.query(&ShortcutQuery::new(scope, text))
    }

    /// Entries whose application name contains `name`, ignoring case.
    ///
    /// An empty `name` returns every entry.
    pub fn filter_by_application(&self, name: &str) -> Vec<&Shortcut> {
        self.query_scope(QueryScope::Application, name)
    }

    /// Entries whose feature description contains `description`, ignoring case.
    ///
    /// An empty `description` returns every entry.
    pub fn filter_by_feature(&self, description: &str) -> Vec<&Shortcut> {
        self.query_scope(QueryScope::Feature, description)
    }

    /// Entries where any of the three fields contains `query`, ignoring case.
    ///
    /// An empty `query` returns every entry.
    pub fn search(&self, query: &str) -> Vec<&Shortcut> {
        self.query_scope(QueryScope::All, query)
    }

    /// Distinct application names starting with `prefix`, ignoring case.
    ///
    /// Names come back in the order they were first catalogued, spelled as in
    /// that first entry. An empty `prefix` suggests nothing.
    pub fn application_suggestions(&self, prefix: &str) -> Vec<&str> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();
        let mut seen: HashSet<String> = HashSet::new();
        let mut names = Vec::new();
        for shortcut in &self.entries {
            let folded = shortcut.application_name.to_lowercase();
            if folded.starts_with(&prefix) && seen.insert(folded) {
                names.push(shortcut.application_name.as_str());
            }
        }
        names
    }

    /// Append an entry read back from storage.
    ///
    /// A missing, empty or already-used identifier is replaced with a fresh
    /// one. Returns `true` when that happened.
    pub(crate) fn restore(&mut self, id: Option<ShortcutId>, draft: ShortcutDraft) -> bool {
        let (id, regenerated) = match id {
            Some(id) if !id.as_str().is_empty() && !self.ids.contains(&id) => (id, false),
            _ => (self.fresh_id(), true),
        };
        self.push(Shortcut::from_parts(id, draft));
        regenerated
    }

    /// Ask the generator for an identifier not yet in the store.
    ///
    /// A generator that keeps producing empty or taken ids is abandoned for
    /// [`UuidGenerator`] after a few attempts.
    fn fresh_id(&self) -> ShortcutId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = ShortcutId::new(self.id_source.new_id());
            if self.is_unused(&id) {
                return id;
            }
        }
        warn!(
            attempts = MAX_ID_ATTEMPTS,
            "Identifier source produced no usable id, falling back to UUID"
        );
        loop {
            let id = ShortcutId::new(UuidGenerator.new_id());
            if self.is_unused(&id) {
                return id;
            }
        }
    }

    fn is_unused(&self, id: &ShortcutId) -> bool {
        !id.as_str().is_empty() && !self.ids.contains(id)
    }

    fn push(&mut self, shortcut: Shortcut) -> &Shortcut {
        self.ids.insert(shortcut.id().clone());
        self.entries.push(shortcut);
        // The vector was just pushed to, so it is non-empty.
        &self.entries[self.entries.len() - 1]
    }
}

impl std::fmt::Debug for ShortcutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutStore")
            .field("entries", &self.entries)
            .finish()
    }
}
