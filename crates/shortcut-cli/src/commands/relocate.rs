//! Relocate command - move the catalogue to a new file.

use crate::app::{ensure_saved, App};
use shortcut_core::Config;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Run the relocate command.
///
/// The current catalogue is written to `path` straight away. With `remember`,
/// the path is stored as `general.data_file` so later runs use it.
pub fn run(
    config: Config,
    config_path: Option<PathBuf>,
    file: Option<PathBuf>,
    path: &Path,
    remember: bool,
) -> anyhow::Result<()> {
    let mut app = App::for_update(config, file)?;
    let previous = app.catalog.current_path().to_path_buf();

    let outcome = app.catalog.relocate(path);
    ensure_saved(&outcome)?;
    println!("{}", outcome);

    if remember {
        let target = if path.is_absolute() {
            path.to_path_buf()
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(path),
                Err(e) => {
                    warn!(error = %e, "Could not resolve working directory, storing path as given");
                    path.to_path_buf()
                }
            }
        };
        app.config.general.data_file = Some(target);
        match config_path {
            Some(ref config_path) => app.config.save_to(config_path)?,
            None => app.config.save()?,
        }
        println!(
            "Future commands will use this file (was {}).",
            previous.display()
        );
    }

    Ok(())
}
