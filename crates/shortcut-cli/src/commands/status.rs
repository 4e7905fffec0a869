//! Status command - show catalogue location and size.

use crate::app::App;
use shortcut_core::Config;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Run the status command.
pub fn run(config: Config, file: Option<PathBuf>) -> anyhow::Result<()> {
    let app = App::new(config, file)?;
    let path = app.catalog.current_path();

    println!("Shortcut List Status");
    println!("====================");
    println!();
    println!("  Shortcut file: {}", path.display());
    println!(
        "  File exists:   {}",
        if path.exists() { "yes" } else { "no (empty catalogue)" }
    );
    println!("  Shortcuts:     {}", app.catalog.store().len());

    let mut per_app: BTreeMap<&str, usize> = BTreeMap::new();
    for shortcut in app.catalog.store().list() {
        *per_app.entry(shortcut.application_name.as_str()).or_default() += 1;
    }

    if !per_app.is_empty() {
        println!();
        println!("Applications:");
        for (name, count) in per_app {
            println!("  {} ({})", name, count);
        }
    }

    Ok(())
}
