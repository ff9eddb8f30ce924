//! Error types for trackstats-api
//!
//! Load failures degrade the service instead of stopping it; query failures
//! are turned into JSON bodies at the HTTP boundary.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Dataset load errors
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source CSV does not exist
    #[error("File not found at {}", .0.display())]
    NotFound(PathBuf),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row has more fields than the header
    #[error("Row {row}: expected {expected} fields, saw {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// No header row
    #[error("No columns to parse from file")]
    NoColumns,
}

/// Errors raised while computing a query over a loaded table
#[derive(Debug, Error)]
pub enum QueryError {
    /// Query needs a column the table does not have
    #[error("Column not found: {0}")]
    MissingColumn(String),
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Dataset failed to load at startup
    #[error("Data not loaded")]
    DataUnavailable,

    /// Unexpected failure inside a query
    #[error("Error in {operation}: {source}")]
    QueryFault {
        operation: &'static str,
        #[source]
        source: QueryError,
    },
}

impl ApiError {
    pub fn query_fault(operation: &'static str, source: QueryError) -> Self {
        ApiError::QueryFault { operation, source }
    }

    /// Message returned to the caller
    pub fn client_message(&self) -> String {
        match self {
            ApiError::DataUnavailable => self.to_string(),
            ApiError::QueryFault { source, .. } => source.to_string(),
        }
    }
}

/// Convenience Result type for handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}", self);

        let body = Json(json!({
            "error": self.client_message(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
