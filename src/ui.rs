//! UI utilities for terminal output formatting.

use std::io::{self, Write};

/// Spaces on each side of a cell value.
const CELL_MARGIN: usize = 1;

/// Write a markdown table with a `#` title line.
///
/// Headers are centered and values left-aligned; every column is padded to
/// its widest cell.
///
/// ```text
/// # Error Reason
/// |  Code  |   Name    |
/// |--------|-----------|
/// | PV1001 | NULL_NAME |
/// ```
pub fn write_markdown_table<W: Write>(
    out: &mut W,
    title: &str,
    headers: &[&str],
    rows: &[Vec<String>],
) -> io::Result<()> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();

    writeln!(out, "# {title}")?;

    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad_cell(&format!("{header:^width$}")))
        .collect();
    writeln!(out, "|{}|", header_cells.join("|"))?;

    let rule: Vec<String> = widths
        .iter()
        .map(|width| "-".repeat(width + 2 * CELL_MARGIN))
        .collect();
    writeln!(out, "|{}|", rule.join("|"))?;

    for row in rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let value = row.get(i).map_or("", String::as_str);
                pad_cell(&format!("{value:<width$}"))
            })
            .collect();
        writeln!(out, "|{}|", cells.join("|"))?;
    }

    writeln!(out)
}

fn pad_cell(text: &str) -> String {
    let margin = " ".repeat(CELL_MARGIN);
    format!("{margin}{text}{margin}")
}
