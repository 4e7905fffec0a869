//! Remove command - delete a shortcut by id.

use crate::app::{ensure_saved, App};
use shortcut_core::{Config, ShortcutId};
use std::path::PathBuf;

/// Run the remove command.
pub fn run(config: Config, file: Option<PathBuf>, id: &str) -> anyhow::Result<()> {
    let mut app = App::for_update(config, file)?;

    let update = app.catalog.delete(&ShortcutId::new(id));
    ensure_saved(&update.saved)?;

    if update.changed() {
        println!("Removed {} ({} shortcuts left)", id, update.listing.len());
    } else {
        println!("No shortcut with id {}. Nothing removed.", id);
    }

    Ok(())
}
