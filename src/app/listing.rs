use crate::core::catalog;
use anyhow::Context;
use std::fmt::Write;

/// Renders the exercise catalog as pretty JSON or as an aligned table.
pub fn render(json: bool) -> anyhow::Result<String> {
    let entries = catalog::entries();
    if json {
        return serde_json::to_string_pretty(&entries).context("failed to render catalog as JSON");
    }

    let mut table = String::new();
    for entry in &entries {
        let marker = if entry.interactive { "*" } else { " " };
        writeln!(table, "{:<14} {} {}", entry.id.as_str(), marker, entry.title)
            .context("failed to render catalog table")?;
    }
    table.push('\n');
    table.push_str("* reads input from the console");
    Ok(table)
}
