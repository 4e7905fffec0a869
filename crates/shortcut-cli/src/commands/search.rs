//! Search command - find shortcuts by substring.

use super::print_shortcuts;
use crate::app::App;
use crate::OutputFormat;
use shortcut_core::{Config, QueryScope};
use std::path::PathBuf;
use std::time::Instant;

/// Run the search command.
pub fn run(
    config: Config,
    file: Option<PathBuf>,
    query: &str,
    scope: QueryScope,
    limit: Option<usize>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let app = App::new(config, file)?;

    let start = Instant::now();
    let mut results = app.catalog.query(scope, query);
    let elapsed = start.elapsed();
    let found = results.len();

    if let Some(limit) = app.config.result_limit(limit) {
        results.truncate(limit);
    }

    print_shortcuts(&results, &output, app.config.display.show_ids)?;

    if let OutputFormat::Text = output {
        eprintln!();
        eprintln!(
            "Found {} results ({} scope) in {:.3}ms",
            found,
            scope,
            elapsed.as_secs_f64() * 1000.0
        );
        if results.len() < found {
            eprintln!("Showing the first {}", results.len());
        }
    }

    Ok(())
}
