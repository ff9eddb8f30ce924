//! Per-platform total / average / median

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::TrackTable;

/// Platform name → metric column
pub const PLATFORM_COLUMNS: [(&str, &str); 3] = [
    ("Spotify", "Spotify Streams"),
    ("YouTube", "YouTube Views"),
    ("TikTok", "TikTok Views"),
];

/// Summary statistics for one platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformStats {
    pub average: f64,
    pub median: f64,
    pub total: f64,
}

/// Summary per platform whose column exists
///
/// Platforms with no column are left out. An empty table reports zeros.
pub fn platform_summary(table: &TrackTable) -> BTreeMap<String, PlatformStats> {
    PLATFORM_COLUMNS
        .iter()
        .filter_map(|(platform, column_name)| {
            let column = table.column(column_name)?;
            let values: Vec<f64> = column.cells().iter().filter_map(|c| c.as_f64()).collect();
            Some((platform.to_string(), summarize(values)))
        })
        .collect()
}

fn summarize(mut values: Vec<f64>) -> PlatformStats {
    if values.is_empty() {
        return PlatformStats {
            average: 0.0,
            median: 0.0,
            total: 0.0,
        };
    }

    let total: f64 = values.iter().sum();
    let average = total / values.len() as f64;

    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    let median = if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    };

    PlatformStats {
        average,
        median,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Cell, Column};

    fn numbers(values: &[f64]) -> Vec<Cell> {
        values.iter().map(|v| Cell::Number(*v)).collect()
    }

    #[test]
    fn test_summary_statistics() {
        let table = TrackTable::from_columns(vec![
            Column::new("Spotify Streams", numbers(&[10.0, 1.0, 4.0])),
            Column::new("YouTube Views", numbers(&[1.0, 2.0, 3.0])),
            Column::new("TikTok Views", numbers(&[0.0, 0.0, 9.0])),
        ]);

        let summary = platform_summary(&table);

        assert_eq!(
            summary["Spotify"],
            PlatformStats {
                average: 5.0,
                median: 4.0,
                total: 15.0
            }
        );
        assert_eq!(summary["YouTube"].median, 2.0);
        assert_eq!(summary["TikTok"].total, 9.0);
    }

    #[test]
    fn test_even_count_median() {
        let stats = summarize(vec![4.0, 1.0, 3.0, 2.0]);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.average, 2.5);
    }

    #[test]
    fn test_missing_columns_omitted() {
        let table = TrackTable::from_columns(vec![Column::new("YouTube Views", numbers(&[1.0]))]);

        let summary = platform_summary(&table);

        assert_eq!(summary.len(), 1);
        assert!(summary.contains_key("YouTube"));
        assert!(!summary.contains_key("Spotify"));
        assert!(!summary.contains_key("TikTok"));
    }

    #[test]
    fn test_empty_table_reports_zeros() {
        let table = TrackTable::from_columns(vec![Column::new("TikTok Views", vec![])]);

        let stats = platform_summary(&table)["TikTok"];

        assert_eq!(stats.total, 0.0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.median, 0.0);
    }

    #[test]
    fn test_json_keys_sorted() {
        let table = TrackTable::from_columns(vec![
            Column::new("YouTube Views", numbers(&[2.0])),
            Column::new("Spotify Streams", numbers(&[1.0])),
        ]);

        let json = serde_json::to_string(&platform_summary(&table)).unwrap();

        assert_eq!(
            json,
            r#"{"Spotify":{"average":1.0,"median":1.0,"total":1.0},"YouTube":{"average":2.0,"median":2.0,"total":2.0}}"#
        );
    }
}
