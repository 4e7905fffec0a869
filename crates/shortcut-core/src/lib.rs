//! # Shortcut List Core Library
//!
//! This crate provides the record store, search and persistence for Shortcut
//! List, a catalogue of application keyboard shortcuts. It knows nothing about
//! windows or terminals; presentation layers drive it through
//! [`ShortcutCatalog`].
//!
//! ## Architecture
//!
//! - **Types** (`types`): The shortcut entry, its identifier, and id generation
//! - **Search** (`search`): Query scopes and case-insensitive matching
//! - **Store** (`store`): Ordered in-memory collection with add/remove/filter
//! - **Persistence** (`persistence`): JSON document on disk
//! - **Catalog** (`catalog`): Store + file, saving after every change
//! - **Config** (`config`): Configuration management
//!
//! ## Example
//!
//! ```rust
//! use shortcut_core::{QueryScope, ShortcutDraft, ShortcutStore};
//!
//! let mut store = ShortcutStore::new();
//! store.add(ShortcutDraft::new("Visual Studio Code", "Comment line", "Cmd+/"));
//!
//! for shortcut in store.query_scope(QueryScope::All, "comment") {
//!     println!("{}: {}", shortcut.application_name, shortcut.shortcut_key);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod persistence;
pub mod search;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use catalog::{CatalogUpdate, ShortcutCatalog};
pub use config::Config;
pub use error::{Result, ShortcutError};
pub use persistence::{SaveOutcome, ShortcutFile};
pub use search::{QueryScope, ShortcutQuery};
pub use store::ShortcutStore;
pub use types::{
    IdGenerator, SequentialIdGenerator, Shortcut, ShortcutDraft, ShortcutId, UuidGenerator,
};
