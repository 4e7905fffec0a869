//! Application state management.

use anyhow::Context;
use shortcut_core::{Config, SaveOutcome, ShortcutCatalog, ShortcutFile};
use std::path::PathBuf;
use tracing::info;

/// Shared application state.
pub struct App {
    /// Configuration
    pub config: Config,

    /// The loaded catalogue
    pub catalog: ShortcutCatalog,
}

impl App {
    /// Create an application instance for a read-only command.
    ///
    /// An unreadable shortcut file is treated as an empty catalogue.
    /// `file_override` (from `--file`) takes precedence over the configured
    /// location.
    pub fn new(config: Config, file_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let file = Self::resolve_file(&config, file_override)?;
        Ok(Self::ready(config, ShortcutCatalog::open(file)))
    }

    /// Create an application instance for a command that saves.
    ///
    /// Fails instead of starting from an empty catalogue when the file exists
    /// but cannot be read, so the next save does not overwrite it.
    pub fn for_update(config: Config, file_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let file = Self::resolve_file(&config, file_override)?;
        let path = file.path().to_path_buf();
        let catalog = ShortcutCatalog::try_open(file).with_context(|| {
            format!(
                "Refusing to modify {}; repair or move it and try again",
                path.display()
            )
        })?;
        Ok(Self::ready(config, catalog))
    }

    fn resolve_file(
        config: &Config,
        file_override: Option<PathBuf>,
    ) -> anyhow::Result<ShortcutFile> {
        match file_override {
            Some(path) => Ok(ShortcutFile::new(path)),
            None => Ok(config.shortcut_file()?),
        }
    }

    fn ready(config: Config, catalog: ShortcutCatalog) -> Self {
        info!(
            path = %catalog.current_path().display(),
            entries = catalog.store().len(),
            "Application initialized"
        );
        App { config, catalog }
    }
}

/// Turn a failed save into the generic notice the user sees.
pub fn ensure_saved(outcome: &SaveOutcome) -> anyhow::Result<()> {
    if outcome.is_saved() {
        return Ok(());
    }
    anyhow::bail!("Could not save shortcuts to {}", outcome.path().display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortcut_core::{ShortcutDraft, ShortcutError};
    use std::fs;
    use tempfile::TempDir;

    const TRUNCATED: &str =
        r#"[{"id": "x", "application_name": "X", "feature_description": "F", "shortcut_key""#;

    #[test]
    fn test_update_refuses_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shortcuts.json");
        fs::write(&path, TRUNCATED).unwrap();

        let err = App::for_update(Config::default(), Some(path.clone()))
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<ShortcutError>(),
            Some(ShortcutError::MalformedDocument { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), TRUNCATED);
    }

    #[test]
    fn test_read_only_tolerates_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shortcuts.json");
        fs::write(&path, TRUNCATED).unwrap();

        let app = App::new(Config::default(), Some(path.clone())).unwrap();
        assert!(app.catalog.store().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), TRUNCATED);
    }

    #[test]
    fn test_update_on_missing_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("new.json");

        let mut app = App::for_update(Config::default(), Some(path.clone())).unwrap();
        let update = app
            .catalog
            .create(ShortcutDraft::new("Chrome", "New Tab", "Cmd+T"))
            .unwrap();

        assert!(ensure_saved(&update.saved).is_ok());
        assert!(path.exists());
    }
}
