//! Add command - catalogue a new shortcut.

use crate::app::{ensure_saved, App};
use shortcut_core::{Config, ShortcutDraft};
use std::path::PathBuf;

/// Run the add command.
pub fn run(
    config: Config,
    file: Option<PathBuf>,
    application: &str,
    feature: &str,
    key: &str,
) -> anyhow::Result<()> {
    let mut app = App::for_update(config, file)?;

    let update = app
        .catalog
        .create(ShortcutDraft::new(application, feature, key))?;
    ensure_saved(&update.saved)?;

    if let Some(id) = &update.affected {
        println!("Added {} ({} shortcuts total)", id, update.listing.len());
    }

    Ok(())
}
