//! Load diagnostics for `/api/debug/data-info`

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::dataset::{Dataset, TrackTable};

const DEBUG_SAMPLE_ROWS: usize = 3;

/// Diagnostic report; field order gives sorted JSON keys
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DebugInfo {
    Loaded {
        columns: Vec<String>,
        sample_data: Vec<Map<String, Value>>,
        /// (rows, columns)
        shape: (usize, usize),
        status: &'static str,
    },
    Absent {
        data_directory_contents: Vec<String>,
        file_exists: bool,
        load_error: String,
        message: &'static str,
        status: &'static str,
        working_directory: String,
    },
}

/// Describe the dataset: a short preview when loaded, the filesystem
/// context the loader saw when not
pub fn debug_info(dataset: &Dataset) -> DebugInfo {
    match dataset {
        Dataset::Loaded { table, .. } => loaded_info(table),
        Dataset::Absent { data_file, reason } => absent_info(data_file, reason),
    }
}

fn loaded_info(table: &TrackTable) -> DebugInfo {
    let sample_data = (0..table.row_count().min(DEBUG_SAMPLE_ROWS))
        .map(|index| table.row_json(index, |_, cell| cell.to_json()))
        .collect();

    DebugInfo::Loaded {
        columns: table.column_names(),
        sample_data,
        shape: (table.row_count(), table.column_count()),
        status: "success",
    }
}

fn absent_info(data_file: &Path, reason: &str) -> DebugInfo {
    let data_dir = match data_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let working_directory = std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();

    DebugInfo::Absent {
        data_directory_contents: list_directory(data_dir),
        file_exists: data_file.exists(),
        load_error: reason.to_string(),
        message: "Data not loaded",
        status: "error",
        working_directory,
    }
}

/// Sorted entry names; empty when the directory is missing or unreadable
fn list_directory(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Cell, Column};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_absent_dataset_missing_file() {
        let dataset = Dataset::Absent {
            data_file: "/no/such/dir/tracks.csv".into(),
            reason: "File not found".into(),
        };

        let info = serde_json::to_value(debug_info(&dataset)).unwrap();

        assert_eq!(info["status"], "error");
        assert_eq!(info["message"], "Data not loaded");
        assert_eq!(info["file_exists"], false);
        assert_eq!(info["data_directory_contents"], json!([]));
        assert!(info["working_directory"].is_string());
    }

    #[test]
    fn test_absent_dataset_lists_data_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.csv"), "x").unwrap();
        std::fs::write(dir.path().join("a.txt"), "x").unwrap();

        let dataset = Dataset::Absent {
            data_file: dir.path().join("tracks.csv"),
            reason: "File not found".into(),
        };

        match debug_info(&dataset) {
            DebugInfo::Absent {
                data_directory_contents,
                file_exists,
                ..
            } => {
                assert!(!file_exists);
                assert_eq!(data_directory_contents, vec!["a.txt", "b.csv"]);
            }
            DebugInfo::Loaded { .. } => panic!("expected absent report"),
        }
    }

    #[test]
    fn test_loaded_dataset_preview() {
        let table = TrackTable::from_columns(vec![
            Column::new(
                "Artist",
                vec![
                    Cell::Text("A".into()),
                    Cell::Null,
                    Cell::Text("C".into()),
                    Cell::Text("D".into()),
                ],
            ),
            Column::new(
                "Explicit Track",
                vec![
                    Cell::Integer(1),
                    Cell::Integer(0),
                    Cell::Integer(1),
                    Cell::Integer(0),
                ],
            ),
        ]);
        let dataset = Dataset::from_table("tracks.csv", table);

        let info = serde_json::to_value(debug_info(&dataset)).unwrap();

        assert_eq!(info["status"], "success");
        assert_eq!(info["shape"], json!([4, 2]));
        assert_eq!(info["columns"], json!(["Artist", "Explicit Track"]));
        assert_eq!(info["sample_data"].as_array().unwrap().len(), 3);
        assert_eq!(info["sample_data"][1]["Artist"], Value::Null);
        assert_eq!(info["sample_data"][0]["Explicit Track"], json!(1));
        assert!(info["sample_data"][0]["Explicit Track"].is_i64());
    }
}
