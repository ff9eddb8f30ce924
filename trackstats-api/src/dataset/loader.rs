//! CSV loader
//!
//! Reads a Latin-1 encoded CSV, infers a type per column and cleans the
//! metric columns listed in [`NUMERIC_COLUMNS`].

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use super::cell::Cell;
use super::clean::{clean_column, NUMERIC_COLUMNS};
use super::table::{Column, TrackTable};
use crate::error::LoadError;

/// Tokens read as missing values
const NULL_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Load and clean the track table from `path`
pub fn load_table(path: &Path) -> Result<TrackTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    parse_table(file)
}

/// Parse a Latin-1 CSV stream into a cleaned table
pub fn parse_table<R: Read>(reader: R) -> Result<TrackTable, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = header_names(csv_reader.byte_headers()?);
    if headers.is_empty() {
        return Err(LoadError::NoColumns);
    }

    let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    let mut record = ByteRecord::new();
    let mut row = 0usize;

    while csv_reader.read_byte_record(&mut record)? {
        row += 1;
        if record.len() > headers.len() {
            return Err(LoadError::RaggedRow {
                row,
                expected: headers.len(),
                found: record.len(),
            });
        }

        for (index, column) in raw_columns.iter_mut().enumerate() {
            let value = record.get(index).map(decode_latin1);
            column.push(value.filter(|v| !is_null_token(v)));
        }
    }

    debug!("Parsed {} rows x {} columns", row, headers.len());

    let columns = headers
        .into_iter()
        .zip(raw_columns)
        .map(|(name, raw)| {
            let cells = if NUMERIC_COLUMNS.contains(&name.as_str()) {
                let text: Vec<Cell> = raw
                    .into_iter()
                    .map(|v| v.map(Cell::Text).unwrap_or(Cell::Null))
                    .collect();
                clean_column(&text)
            } else {
                infer_column(raw)
            };
            Column::new(name, cells)
        })
        .collect();

    Ok(TrackTable::from_columns(columns))
}

/// Latin-1 maps every byte straight to the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn is_null_token(value: &str) -> bool {
    NULL_TOKENS.contains(&value)
}

/// Decode header names, naming blank headers and suffixing duplicates
///
/// A suffixed name never collides with a header emitted earlier, so
/// `A,A,A.1` becomes `A`, `A.1`, `A.1.1`.
fn header_names(record: &ByteRecord) -> Vec<String> {
    let mut emitted: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();

    record
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let mut name = decode_latin1(raw);
            if name.is_empty() {
                name = format!("Unnamed: {}", index);
            }

            if emitted.contains(&name) {
                let count = suffixes.entry(name.clone()).or_insert(0);
                name = loop {
                    *count += 1;
                    let candidate = format!("{}.{}", name, count);
                    if !emitted.contains(&candidate) {
                        break candidate;
                    }
                };
            }

            emitted.insert(name.clone());
            name
        })
        .collect()
}

/// Pick the narrowest type that fits the whole column
///
/// Integer only when no value is missing; float when every present value
/// parses; text otherwise.
fn infer_column(raw: Vec<Option<String>>) -> Vec<Cell> {
    let all_present = raw.iter().all(Option::is_some);

    if all_present && !raw.is_empty() {
        let integers: Option<Vec<i64>> = raw
            .iter()
            .map(|v| v.as_deref().and_then(|s| s.trim().parse::<i64>().ok()))
            .collect();
        if let Some(values) = integers {
            return values.into_iter().map(Cell::Integer).collect();
        }
    }

    let floats: Option<Vec<Option<f64>>> = raw
        .iter()
        .map(|v| match v {
            None => Some(None),
            Some(s) => s.trim().parse::<f64>().ok().map(Some),
        })
        .collect();
    if let Some(values) = floats {
        return values
            .into_iter()
            .map(|v| v.map(Cell::Number).unwrap_or(Cell::Null))
            .collect();
    }

    raw.into_iter()
        .map(|v| v.map(Cell::Text).unwrap_or(Cell::Null))
        .collect()
}
