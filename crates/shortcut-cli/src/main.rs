//! # Shortcut List CLI
//!
//! Command-line interface for cataloguing application keyboard shortcuts.
//!
//! ## Commands
//!
//! - `shortcuts add <APP> <FEATURE> <KEY>` - Catalogue a new shortcut
//! - `shortcuts remove <ID>` - Delete a shortcut
//! - `shortcuts edit <ID>` - Change a shortcut's text, keeping its id
//! - `shortcuts list` - Show every shortcut in insertion order
//! - `shortcuts search <QUERY>` - Find shortcuts by substring
//! - `shortcuts apps <PREFIX>` - Suggest catalogued application names
//! - `shortcuts relocate <PATH>` - Save the catalogue somewhere else from now on
//! - `shortcuts status` - Show where the catalogue lives and how big it is
//!
//! ## Example Usage
//!
//! ```bash
//! shortcuts add "Visual Studio Code" "Comment line" "Cmd+/"
//!
//! # Only match application names
//! shortcuts search term --scope application
//!
//! shortcuts list --output json
//! ```

mod app;
mod commands;

use clap::{Parser, Subcommand};
use shortcut_core::{Config, QueryScope, ShortcutError};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Shortcut List - catalogue and search application keyboard shortcuts
#[derive(Parser)]
#[command(name = "shortcuts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Shortcut file to use instead of the configured one
    #[arg(short, long, global = true, env = "SHORTCUTS_FILE")]
    file: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Catalogue a new shortcut
    Add {
        /// Application name (e.g., "Chrome")
        application: String,

        /// What the shortcut does (e.g., "New Tab")
        feature: String,

        /// Key combination (e.g., "Cmd+T")
        key: String,
    },

    /// Delete a shortcut by id
    #[command(alias = "rm")]
    Remove {
        /// Identifier shown by `list`
        id: String,
    },

    /// Change a shortcut's text, keeping its id
    Edit {
        /// Identifier shown by `list`
        id: String,

        /// New application name
        #[arg(long)]
        app: Option<String>,

        /// New feature description
        #[arg(long)]
        feature: Option<String>,

        /// New key combination
        #[arg(long)]
        key: Option<String>,
    },

    /// Show every shortcut in insertion order
    #[command(alias = "ls")]
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Find shortcuts containing the query (case-insensitive)
    #[command(alias = "s")]
    Search {
        /// Text to look for; empty lists everything
        #[arg(default_value = "")]
        query: String,

        /// Fields to search (all, application, feature)
        #[arg(short, long, default_value = "all")]
        scope: QueryScope,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Suggest catalogued application names starting with a prefix
    Apps {
        /// Start of the application name (case-insensitive)
        prefix: String,
    },

    /// Save the catalogue to a new file and use it from now on
    Relocate {
        /// New shortcut file
        path: PathBuf,

        /// Don't record the new location in the configuration file
        #[arg(long)]
        no_remember: bool,
    },

    /// Show catalogue location and size
    Status,
}

/// Exit status for rejected input, the same one clap uses for bad arguments
const USAGE_EXIT_CODE: i32 = 2;

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Setup logging; listings go to stdout, so logs go to stderr
    let log_level = if cli.quiet {
        "error".to_string()
    } else {
        match cli.verbose {
            0 => config.general.log_level.clone(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .init();

    let config_path = cli.config.clone();

    // Execute command
    let result = match cli.command {
        Commands::Add {
            application,
            feature,
            key,
        } => commands::add::run(config, cli.file, &application, &feature, &key),
        Commands::Remove { id } => commands::remove::run(config, cli.file, &id),
        Commands::Edit {
            id,
            app,
            feature,
            key,
        } => commands::edit::run(config, cli.file, &id, app, feature, key),
        Commands::List { output } => commands::list::run(config, cli.file, output),
        Commands::Search {
            query,
            scope,
            limit,
            output,
        } => commands::search::run(config, cli.file, &query, scope, limit, output),
        Commands::Relocate { path, no_remember } => {
            commands::relocate::run(config, config_path, cli.file, &path, !no_remember)
        }
        Commands::Apps { prefix } => commands::apps::run(config, cli.file, &prefix),
        Commands::Status => commands::status::run(config, cli.file),
    };

    if let Err(err) = result {
        if let Some(e) = usage_error(&err) {
            eprintln!("error: {}", e);
            std::process::exit(USAGE_EXIT_CODE);
        }
        return Err(err);
    }
    Ok(())
}

/// The core error behind `err`, if it was caused by what the user typed.
fn usage_error(err: &anyhow::Error) -> Option<&ShortcutError> {
    err.downcast_ref::<ShortcutError>().filter(|e| e.is_validation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortcut_core::ShortcutDraft;

    #[test]
    fn test_missing_field_is_usage_error() {
        let draft = ShortcutDraft::new("Chrome", " ", "Cmd+T");
        let err = anyhow::Error::from(draft.validate().unwrap_err());
        assert!(matches!(
            usage_error(&err),
            Some(ShortcutError::MissingField {
                field: "feature_description"
            })
        ));
    }

    #[test]
    fn test_other_errors_are_not_usage_errors() {
        let err = anyhow::Error::from(ShortcutError::malformed("/tmp/shortcuts.json", "eof"));
        assert!(usage_error(&err).is_none());

        let err = anyhow::anyhow!("Could not save shortcuts");
        assert!(usage_error(&err).is_none());
    }
}
