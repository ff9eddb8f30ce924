//! Dataset layer: cell model, cleaning, CSV loading and the loaded-or-absent
//! dataset handed to the query layer

use std::path::{Path, PathBuf};

use tracing::{error, info};

pub mod cell;
pub mod clean;
pub mod loader;
pub mod table;

pub use cell::Cell;
pub use clean::{clean_numeric, NUMERIC_COLUMNS};
pub use table::{Column, TrackTable};

/// Outcome of the one-time startup load
///
/// A failed load is kept as `Absent` so the service still starts and every
/// query can report the degraded state.
#[derive(Debug, Clone)]
pub enum Dataset {
    Loaded { data_file: PathBuf, table: TrackTable },
    Absent { data_file: PathBuf, reason: String },
}

impl Dataset {
    /// Load the dataset from `data_file`, logging instead of failing
    pub fn load(data_file: &Path) -> Self {
        match loader::load_table(data_file) {
            Ok(table) => {
                info!(
                    "Loaded {} records with {} columns from {}",
                    table.row_count(),
                    table.column_count(),
                    data_file.display()
                );
                Dataset::Loaded {
                    data_file: data_file.to_path_buf(),
                    table,
                }
            }
            Err(e) => {
                error!("Error loading data: {}", e);
                Dataset::Absent {
                    data_file: data_file.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Wrap an already built table
    pub fn from_table(data_file: impl Into<PathBuf>, table: TrackTable) -> Self {
        Dataset::Loaded {
            data_file: data_file.into(),
            table,
        }
    }

    pub fn table(&self) -> Option<&TrackTable> {
        match self {
            Dataset::Loaded { table, .. } => Some(table),
            Dataset::Absent { .. } => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.table().is_some()
    }

    pub fn data_file(&self) -> &Path {
        match self {
            Dataset::Loaded { data_file, .. } | Dataset::Absent { data_file, .. } => data_file,
        }
    }
}
