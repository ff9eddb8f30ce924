//! Top artists by summed Spotify streams

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::TrackTable;
use crate::error::QueryError;

/// Result cap for `/api/top-artists`
pub const TOP_ARTISTS_LIMIT: usize = 10;

const ARTIST_COLUMN: &str = "Artist";
const STREAMS_COLUMN: &str = "Spotify Streams";

/// One entry of the top-artists ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistStreams {
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Spotify Streams")]
    pub total_streams: f64,
}

/// The `n` artists with the largest summed stream count, largest first
///
/// Rows without an artist are skipped. Artists with equal sums keep name
/// order (ascending).
pub fn top_artists(table: &TrackTable, n: usize) -> Result<Vec<ArtistStreams>, QueryError> {
    let artists = table
        .column(ARTIST_COLUMN)
        .ok_or_else(|| QueryError::MissingColumn(ARTIST_COLUMN.to_string()))?;
    let streams = table
        .column(STREAMS_COLUMN)
        .ok_or_else(|| QueryError::MissingColumn(STREAMS_COLUMN.to_string()))?;

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for (artist, value) in artists.cells().iter().zip(streams.cells()) {
        if let Some(name) = artist.key_text() {
            *totals.entry(name).or_insert(0.0) += value.as_f64().unwrap_or(0.0);
        }
    }

    let mut ranked: Vec<ArtistStreams> = totals
        .into_iter()
        .map(|(artist, total_streams)| ArtistStreams {
            artist,
            total_streams,
        })
        .collect();

    // Stable sort keeps name order among equal totals
    ranked.sort_by(|a, b| b.total_streams.total_cmp(&a.total_streams));
    ranked.truncate(n);

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{clean::clean_column, Cell, Column};

    fn table(rows: &[(Option<&str>, Cell)]) -> TrackTable {
        let artists = rows
            .iter()
            .map(|(a, _)| a.map(|s| Cell::Text(s.to_string())).unwrap_or(Cell::Null))
            .collect();
        let raw: Vec<Cell> = rows.iter().map(|(_, c)| c.clone()).collect();

        TrackTable::from_columns(vec![
            Column::new("Artist", artists),
            Column::new("Spotify Streams", clean_column(&raw)),
        ])
    }

    #[test]
    fn test_grouping_scenario() {
        let table = table(&[
            (Some("A"), Cell::Text("1,000".into())),
            (Some("A"), Cell::Integer(200)),
            (Some("B"), Cell::Text("bad".into())),
        ]);

        let result = top_artists(&table, TOP_ARTISTS_LIMIT).unwrap();

        assert_eq!(
            result,
            vec![
                ArtistStreams {
                    artist: "A".into(),
                    total_streams: 1200.0
                },
                ArtistStreams {
                    artist: "B".into(),
                    total_streams: 0.0
                },
            ]
        );
    }

    #[test]
    fn test_limit_and_descending_order() {
        let rows: Vec<(Option<String>, Cell)> = (0..25)
            .map(|i| (Some(format!("Artist {:02}", i)), Cell::Number((i * 7 % 25) as f64)))
            .collect();
        let borrowed: Vec<(Option<&str>, Cell)> = rows
            .iter()
            .map(|(a, c)| (a.as_deref(), c.clone()))
            .collect();

        let result = top_artists(&table(&borrowed), 10).unwrap();

        assert_eq!(result.len(), 10);
        assert!(result
            .windows(2)
            .all(|w| w[0].total_streams >= w[1].total_streams));
        assert_eq!(result[0].total_streams, 24.0);
    }

    #[test]
    fn test_ties_ordered_by_name() {
        let table = table(&[
            (Some("Zed"), Cell::Number(5.0)),
            (Some("Abe"), Cell::Number(5.0)),
            (Some("Max"), Cell::Number(9.0)),
        ]);

        let names: Vec<String> = top_artists(&table, 10)
            .unwrap()
            .into_iter()
            .map(|a| a.artist)
            .collect();

        assert_eq!(names, vec!["Max", "Abe", "Zed"]);
    }

    #[test]
    fn test_null_artist_rows_skipped() {
        let table = table(&[(None, Cell::Number(99.0)), (Some("A"), Cell::Number(1.0))]);

        let result = top_artists(&table, 10).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].artist, "A");
    }

    #[test]
    fn test_missing_column_is_fault() {
        let table = TrackTable::from_columns(vec![Column::new("Artist", vec![Cell::Null])]);

        let result = top_artists(&table, 10);

        assert!(matches!(result, Err(QueryError::MissingColumn(c)) if c == "Spotify Streams"));
    }

    #[test]
    fn test_json_field_names() {
        let entry = ArtistStreams {
            artist: "A".into(),
            total_streams: 1200.0,
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"Artist":"A","Spotify Streams":1200.0}"#
        );
    }
}
