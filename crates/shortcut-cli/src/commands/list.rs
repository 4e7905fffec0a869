//! List command - show every shortcut.

use super::print_shortcuts;
use crate::app::App;
use crate::OutputFormat;
use shortcut_core::Config;
use std::path::PathBuf;

/// Run the list command.
pub fn run(config: Config, file: Option<PathBuf>, output: OutputFormat) -> anyhow::Result<()> {
    let app = App::new(config, file)?;
    print_shortcuts(&app.catalog.listing(), &output, app.config.display.show_ids)
}
