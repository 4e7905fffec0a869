//! Apps command - complete an application name from the catalogue.

use crate::app::App;
use shortcut_core::Config;
use std::path::PathBuf;

/// Run the apps command, printing one suggestion per line.
pub fn run(config: Config, file: Option<PathBuf>, prefix: &str) -> anyhow::Result<()> {
    let app = App::new(config, file)?;

    for name in app.catalog.application_suggestions(prefix) {
        println!("{}", name);
    }

    Ok(())
}
