//! Default usage renderer.
//!
//! A pure function from dispatch path + synopsis to the columnar help
//! text printed by [`Help::standard`](crate::Help::standard). Embedders
//! wanting different formatting read the same snapshot and ignore this
//! module entirely.

use crate::synopsis::{Entry, Synopsis};

/// Extra spacing between the widest name and the description column.
const COLUMN_GAP: usize = 6;

/// Render the usage text for one parse boundary.
///
/// Layout: a `Usage:` line (space-joined dispatch path, one `<name>` atom
/// per named required binder, `[options]` / `[command] [command-options]`
/// markers), then an `Options:` section and a `Commands:` section. The
/// help entry is listed under `Commands:` when the group has commands,
/// otherwise under `Options:`. Both sections share one name column.
pub fn usage(path: &[String], synopsis: &Synopsis) -> String {
    let mut result = String::from("Usage: ");
    if !path.is_empty() {
        result.push_str(&path.join(" "));
    }

    let help_is_listed = synopsis
        .help
        .as_ref()
        .is_some_and(|entry| entry.names.iter().any(|name| !name.is_empty()));
    if !help_is_listed
        && synopsis.required.is_empty()
        && synopsis.optional.is_empty()
        && synopsis.flags.is_empty()
        && synopsis.commands.is_empty()
    {
        return result;
    }

    let mut option_rows: Vec<(String, String)> = Vec::new();
    let mut command_rows: Vec<(String, String)> = Vec::new();
    let mut name_column = 0usize;

    let mut add_row = |rows: &mut Vec<(String, String)>, entry: &Entry| {
        let name = join_names(&entry.names);
        if name.is_empty() {
            return;
        }
        name_column = name_column.max(name.len());
        rows.push((name, entry.description.clone()));
    };

    if let Some(help) = &synopsis.help {
        if synopsis.commands.is_empty() {
            add_row(&mut option_rows, help);
        } else {
            add_row(&mut command_rows, help);
        }
    }
    for entry in &synopsis.required {
        add_row(&mut option_rows, entry);
        if entry.names.iter().any(|name| !name.is_empty()) {
            if let Some(first) = entry.names.first() {
                result.push_str(" <");
                result.push_str(first);
                result.push('>');
            }
        }
    }
    for entry in &synopsis.optional {
        add_row(&mut option_rows, entry);
    }
    for entry in &synopsis.flags {
        add_row(&mut option_rows, entry);
    }
    for entry in &synopsis.commands {
        add_row(&mut command_rows, entry);
    }

    if !option_rows.is_empty() {
        result.push_str(" [options]");
    }
    if !command_rows.is_empty() {
        result.push_str(" [command] [command-options]");
    }
    result.push('\n');

    for (title, rows) in [("Options", &option_rows), ("Commands", &command_rows)] {
        if rows.is_empty() {
            continue;
        }
        result.push('\n');
        result.push_str(title);
        result.push_str(":\n");
        for (name, description) in rows {
            result.push_str("  ");
            result.push_str(name);
            result.push_str(&" ".repeat(name_column - name.len() + COLUMN_GAP));
            result.push_str(description);
            result.push('\n');
        }
    }

    result
}

/// Join synonym names with `|`, skipping empty names after the first.
fn join_names(names: &[String]) -> String {
    let Some(first) = names.first() else {
        return String::new();
    };
    let mut joined = first.clone();
    for name in &names[1..] {
        if name.is_empty() {
            continue;
        }
        joined.push('|');
        joined.push_str(name);
    }
    joined
}
