//! Subcommand implementations and shared output formatting.

pub mod add;
pub mod apps;
pub mod edit;
pub mod list;
pub mod relocate;
pub mod remove;
pub mod search;
pub mod status;

use crate::OutputFormat;
use shortcut_core::Shortcut;

/// Print `shortcuts` to stdout in the requested format.
pub fn print_shortcuts(
    shortcuts: &[Shortcut],
    output: &OutputFormat,
    show_ids: bool,
) -> anyhow::Result<()> {
    match output {
        OutputFormat::Text => print!("{}", render_table(shortcuts, show_ids)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(shortcuts)?),
    }
    Ok(())
}

/// Render a plain-text table with one row per shortcut.
///
/// Columns are padded by character count so non-ASCII names line up in a
/// monospace terminal as long as each character is one cell wide.
pub fn render_table(shortcuts: &[Shortcut], show_ids: bool) -> String {
    if shortcuts.is_empty() {
        return "No shortcuts.\n".to_string();
    }

    let mut headers = vec!["APPLICATION", "FEATURE", "SHORTCUT"];
    if show_ids {
        headers.push("ID");
    }

    let rows: Vec<Vec<&str>> = shortcuts
        .iter()
        .map(|s| {
            let mut row = vec![
                s.application_name.as_str(),
                s.feature_description.as_str(),
                s.shortcut_key.as_str(),
            ];
            if show_ids {
                row.push(s.id().as_str());
            }
            row
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        out.push_str(cell);
        if i < last {
            let pad = width - cell.chars().count() + 2;
            out.extend(std::iter::repeat(' ').take(pad));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortcut_core::{SequentialIdGenerator, ShortcutDraft, ShortcutStore};

    fn sample() -> Vec<Shortcut> {
        let mut store = ShortcutStore::with_id_generator(Box::new(SequentialIdGenerator::new("x")));
        store.add(ShortcutDraft::new("Chrome", "New Tab", "Cmd+T"));
        store.add(ShortcutDraft::new("Terminal", "Clear", "Cmd+K"));
        store.entries().to_vec()
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[], true), "No shortcuts.\n");
    }

    #[test]
    fn test_render_aligns_columns() {
        let table = render_table(&sample(), false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "APPLICATION  FEATURE  SHORTCUT");
        assert_eq!(lines[1], "Chrome       New Tab  Cmd+T");
        assert_eq!(lines[2], "Terminal     Clear    Cmd+K");
    }

    #[test]
    fn test_render_with_ids() {
        let table = render_table(&sample(), true);
        assert!(table.lines().nth(1).unwrap().ends_with("x-1"));
        assert!(table.lines().nth(2).unwrap().ends_with("x-2"));
    }
}
