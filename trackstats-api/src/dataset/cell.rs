//! Cell values of the in-memory track table

use serde_json::{json, Value};

/// A single table cell
///
/// Source cells arrive as text; column inference turns them into integers or
/// floats where the whole column allows it, and designated metric columns are
/// forced to `Number` by the cleaning pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Integer(i64),
    Text(String),
    Null,
}

impl Cell {
    /// Numeric view of the cell; `None` for text, null and non-finite numbers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) if v.is_finite() => Some(*v),
            Cell::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Text used when the cell acts as a grouping key
    pub fn key_text(&self) -> Option<String> {
        match self {
            Cell::Text(s) => Some(s.clone()),
            Cell::Integer(v) => Some(v.to_string()),
            Cell::Number(v) if v.is_finite() => Some(v.to_string()),
            _ => None,
        }
    }

    /// JSON form of the cell
    ///
    /// Null and non-finite numbers become JSON `null`; integers stay plain
    /// integers.
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Number(v) if v.is_finite() => json!(v),
            Cell::Number(_) | Cell::Null => Value::Null,
            Cell::Integer(v) => json!(v),
            Cell::Text(s) => Value::String(s.clone()),
        }
    }
}
