//! Comma-separated `(x, y)` ingestion.
//!
//! The accepted format is deliberately naive: one header line, rows split on `\n`, cells split on
//! `,` with no quoting. The header picks the columns:
//!
//! - x: first header containing `x`, `time` or `date`
//! - y: first header containing `y`, `value` or `data`
//!
//! If either lookup fails, column 0 is x and column 1 is y. Cells are read like a lenient float
//! parser (longest numeric prefix). Rows with an unreadable x or y are dropped.

use crate::foundation::error::{PlotError, PlotResult};

/// Columns chosen for an ingest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnChoice {
    /// Index of the x column.
    pub x: usize,
    /// Index of the y column.
    pub y: usize,
    /// `true` when the header heuristics matched, `false` for the positional fallback.
    pub from_header: bool,
}

/// Result of reading CSV text.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvImport {
    /// Complete rows in file order.
    pub rows: Vec<(f64, f64)>,
    /// Columns the rows were read from.
    pub columns: ColumnChoice,
    /// Number of data lines dropped because a coordinate was unreadable.
    pub dropped: usize,
}

/// Pick x/y columns from a header line.
pub fn choose_columns(header: &str) -> ColumnChoice {
    let headers: Vec<String> = header
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();
    let x = headers
        .iter()
        .position(|h| h.contains('x') || h.contains("time") || h.contains("date"));
    let y = headers
        .iter()
        .position(|h| h.contains('y') || h.contains("value") || h.contains("data"));
    match (x, y) {
        (Some(x), Some(y)) => ColumnChoice {
            x,
            y,
            from_header: true,
        },
        _ => ColumnChoice {
            x: 0,
            y: 1,
            from_header: false,
        },
    }
}

/// Read CSV text into complete `(x, y)` rows.
///
/// Never fails on malformed content: bad rows are dropped and empty input yields no rows.
pub fn import_csv(text: &str) -> CsvImport {
    let mut lines = text.trim().split('\n');
    let header = lines.next().unwrap_or_default();
    let columns = choose_columns(header);

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for (line_no, line) in lines.enumerate() {
        let cells: Vec<&str> = line.split(',').collect();
        let x = cells.get(columns.x).and_then(|c| parse_float_prefix(c));
        let y = cells.get(columns.y).and_then(|c| parse_float_prefix(c));
        match (x, y) {
            (Some(x), Some(y)) => rows.push((x, y)),
            _ => {
                dropped += 1;
                tracing::debug!(line = line_no + 2, "dropping csv row with unreadable x/y");
            }
        }
    }

    if dropped > 0 {
        tracing::debug!(kept = rows.len(), dropped, "csv import finished");
    }

    CsvImport {
        rows,
        columns,
        dropped,
    }
}

/// Read a CSV file from disk and import it.
pub fn import_csv_file(path: &std::path::Path) -> PlotResult<CsvImport> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| PlotError::csv(format!("failed to read '{}': {e}", path.display())))?;
    Ok(import_csv(&text))
}

/// Parse the longest leading decimal number of `cell`, ignoring surrounding whitespace.
///
/// `"3.5kg"` reads as `3.5`, `"bad"` as nothing. Results that are not finite count as unreadable.
pub fn parse_float_prefix(cell: &str) -> Option<f64> {
    let s = cell.trim();
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/csv.rs"]
mod tests;
