//! Best-effort numeric cleaning for metric columns
//!
//! Garbled numeric text is mapped to zero rather than rejected, and rows are
//! never dropped. Consumers rely on this policy.

use super::cell::Cell;

/// Columns cleaned at load time
pub const NUMERIC_COLUMNS: [&str; 6] = [
    "Spotify Streams",
    "Spotify Playlist Count",
    "Spotify Playlist Reach",
    "YouTube Views",
    "YouTube Likes",
    "TikTok Views",
];

/// Normalize a cell to a finite float
///
/// - null → 0
/// - text → ASCII digits and `.` kept, everything else dropped, then parsed;
///   empty or unparseable → 0
/// - numbers → coerced to f64
pub fn clean_numeric(cell: &Cell) -> f64 {
    let value = match cell {
        Cell::Null => 0.0,
        Cell::Text(s) => clean_text(s),
        Cell::Integer(v) => *v as f64,
        Cell::Number(v) => *v,
    };

    // NaN counts as missing; overflow to infinity counts as garbage
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn clean_text(raw: &str) -> f64 {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if kept.is_empty() {
        return 0.0;
    }

    kept.parse::<f64>().unwrap_or(0.0)
}

/// Clean every cell of a column into `Cell::Number`
pub fn clean_column(cells: &[Cell]) -> Vec<Cell> {
    cells
        .iter()
        .map(|cell| Cell::Number(clean_numeric(cell)))
        .collect()
}
