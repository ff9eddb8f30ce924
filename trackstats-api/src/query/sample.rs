//! First-N row sample

use serde::Serialize;
use serde_json::{Map, Value};

use crate::dataset::{clean_numeric, Cell, TrackTable};

/// Row cap for `/api/tracks`
pub const SAMPLE_LIMIT: usize = 100;

/// Columns re-cleaned on the way out
const RECLEANED_COLUMNS: [&str; 3] = [
    "Spotify Streams",
    "Spotify Playlist Count",
    "Spotify Playlist Reach",
];

/// Response body for `/api/tracks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSample {
    pub data: Vec<Map<String, Value>>,
    /// Full table row count, not the sampled count
    pub total: usize,
}

/// First `limit` rows in table order
pub fn sample(table: &TrackTable, limit: usize) -> TrackSample {
    let data = (0..table.row_count().min(limit))
        .map(|index| table.row_json(index, sample_cell))
        .collect();

    TrackSample {
        data,
        total: table.row_count(),
    }
}

fn sample_cell(column: &str, cell: &Cell) -> Value {
    if RECLEANED_COLUMNS.contains(&column) {
        Cell::Number(clean_numeric(cell)).to_json()
    } else {
        cell.to_json()
    }
}
