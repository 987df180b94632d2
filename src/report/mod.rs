//! Terminal and JSON rendering of built tables.

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::error::AppError;
use crate::tables::{Cell, Table};

const HEADER_COLOR: Color = Color::AnsiValue(51);
const TITLE_COLOR: Color = Color::AnsiValue(226);
const COLUMN_GAP: &str = "  ";

/// Text shown for a cell. Reals get one decimal place.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Int(value) => value.to_string(),
        Cell::Real(value) => format!("{value:.1}"),
    }
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right_align {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

/// Writes `table` as aligned columns under a title line.
///
/// Numeric columns are right-aligned. With `color` the title and header are
/// highlighted using terminal escape sequences.
pub fn render_table<W: Write>(table: &Table, out: &mut W, color: bool) -> Result<(), AppError> {
    let formatted: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(format_cell).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            formatted
                .iter()
                .filter_map(|row| row.get(i))
                .map(|text| text.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let numeric: Vec<bool> = (0..table.columns.len())
        .map(|i| {
            !table.rows.is_empty()
                && table
                    .rows
                    .iter()
                    .all(|row| row.get(i).is_some_and(Cell::is_numeric))
        })
        .collect();

    let header = table
        .columns
        .iter()
        .zip(&widths)
        .zip(&numeric)
        .map(|((name, &width), &right)| pad(name, width, right))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let rule = "─".repeat(header.width());

    if color {
        queue!(
            out,
            SetForegroundColor(TITLE_COLOR),
            SetAttribute(Attribute::Bold),
            Print(&table.title),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n"),
            SetForegroundColor(HEADER_COLOR),
            Print(header.trim_end()),
            ResetColor,
            Print("\n")
        )?;
    } else {
        writeln!(out, "{}", table.title)?;
        writeln!(out, "{}", header.trim_end())?;
    }
    writeln!(out, "{rule}")?;

    for row in &formatted {
        let line = row
            .iter()
            .zip(&widths)
            .zip(&numeric)
            .map(|((text, &width), &right)| pad(text, width, right))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        writeln!(out, "{}", line.trim_end())?;
    }

    if table.rows.is_empty() {
        writeln!(out, "(no rows)")?;
    }

    out.flush()?;
    Ok(())
}

/// Writes every table as one pretty-printed JSON array.
pub fn render_json<W: Write>(tables: &[Table], out: &mut W) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, tables)?;
    writeln!(out)?;
    Ok(())
}
