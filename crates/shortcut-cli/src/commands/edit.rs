//! Edit command - change a shortcut's text, keeping its id.

use crate::app::{ensure_saved, App};
use shortcut_core::{Config, ShortcutDraft, ShortcutId};
use std::path::PathBuf;

/// Run the edit command.
///
/// Fields not given on the command line keep their current value.
pub fn run(
    config: Config,
    file: Option<PathBuf>,
    id: &str,
    application: Option<String>,
    feature: Option<String>,
    key: Option<String>,
) -> anyhow::Result<()> {
    let mut app = App::for_update(config, file)?;
    let id = ShortcutId::new(id);

    let current = match app.catalog.store().get(&id) {
        Some(shortcut) => ShortcutDraft::from(shortcut),
        None => {
            println!("No shortcut with id {}. Nothing changed.", id);
            return Ok(());
        }
    };

    if application.is_none() && feature.is_none() && key.is_none() {
        println!("Nothing to change. Use --app, --feature or --key.");
        return Ok(());
    }

    let draft = ShortcutDraft {
        application_name: application.unwrap_or(current.application_name),
        feature_description: feature.unwrap_or(current.feature_description),
        shortcut_key: key.unwrap_or(current.shortcut_key),
    };

    let update = app.catalog.edit(&id, draft)?;
    ensure_saved(&update.saved)?;
    println!("Updated {}", id);

    Ok(())
}
