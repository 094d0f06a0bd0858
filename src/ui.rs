//! Human-readable rendering of run state

use crate::runner::{StructurePath, Value};
use colored::Colorize;

const STRUCTURE_HEADERS: [&str; 3] = ["SECTION", "NAME", "PATH"];

/// Render the detected structure as an aligned table
pub fn render_structure_table(paths: &[StructurePath]) -> String {
    let rows: Vec<[String; 3]> = paths
        .iter()
        .map(|entry| {
            [
                entry.section.clone(),
                entry.name.clone(),
                entry.path.display().to_string(),
            ]
        })
        .collect();

    let mut widths = STRUCTURE_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&STRUCTURE_HEADERS.map(String::from), &widths).bold().to_string());
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row(row: &[String; 3], widths: &[usize; 3]) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    cells.join("  ").trim_end().to_string()
}

/// Render variables as `name: value` lines
///
/// Multi-line values (collections) are indented under their name.
pub fn render_variables<'a>(vars: impl IntoIterator<Item = (&'a String, &'a Value)>) -> String {
    vars.into_iter()
        .map(|(name, value)| {
            let text = value.to_string().replace('\n', "\n    ");
            format!("{}: {}", name.bold(), text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
