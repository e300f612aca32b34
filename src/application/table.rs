// src/application/table.rs
//
// Fixed-width table rendering.
// Columns are supplied by the caller as (header, accessor) pairs, so the
// printer knows nothing about the record type it renders.

use super::console::Console;
use crate::domain::Planet;
use crate::error::AppResult;

/// Width of every column, separator excluded
pub const COLUMN_WIDTH: usize = 15;

/// Column separator
pub const SEPARATOR: char = '|';

/// One table column: a header and how to read its cell from a record
pub struct Column<T> {
    header: &'static str,
    value: fn(&T) -> Option<String>,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, value: fn(&T) -> Option<String>) -> Self {
        Self { header, value }
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Cell text; `None` renders blank
    pub fn value(&self, record: &T) -> Option<String> {
        (self.value)(record)
    }
}

/// Planet columns, in field declaration order
pub fn planet_columns() -> Vec<Column<Planet>> {
    vec![
        Column::new("Name", |p: &Planet| Some(p.name().to_string())),
        Column::new("Diameter", |p: &Planet| Some(p.diameter().to_string())),
        Column::new("SurfaceWater", |p: &Planet| {
            p.surface_water().map(|v| v.to_string())
        }),
        Column::new("Population", |p: &Planet| p.population().map(|v| v.to_string())),
    ]
}

/// Render the header, a dash rule and one line per record.
/// Wide values are not truncated and push later cells to the right.
pub fn render_table<T>(columns: &[Column<T>], records: &[T]) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len() + 2);

    lines.push(
        columns
            .iter()
            .map(|column| cell(column.header))
            .collect::<String>(),
    );
    lines.push("-".repeat(columns.len() * (COLUMN_WIDTH + 1)));

    for record in records {
        lines.push(
            columns
                .iter()
                .map(|column| cell(&column.value(record).unwrap_or_default()))
                .collect::<String>(),
        );
    }

    lines
}

/// Write the rendered table to the console
pub fn print_table<T>(
    console: &mut dyn Console,
    columns: &[Column<T>],
    records: &[T],
) -> AppResult<()> {
    for line in render_table(columns, records) {
        console.write_line(&line)?;
    }
    Ok(())
}

fn cell(text: &str) -> String {
    format!("{:<width$}{}", text, SEPARATOR, width = COLUMN_WIDTH)
}
