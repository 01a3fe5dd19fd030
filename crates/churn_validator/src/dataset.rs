//! Dataset representation for validation.
//!
//! This module provides the types used to hand tabular data to the validator.
//! Loading the data (CSV, database, ...) is the caller's job.

use crate::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// A value in a dataset.
///
/// Deserializes untagged from JSON: `null`, integers, floats and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

impl DataValue {
    /// Returns true if this value is missing.
    ///
    /// A NaN float counts as missing, the way tabular imports encode blanks
    /// in numeric columns.
    pub fn is_null(&self) -> bool {
        match self {
            DataValue::Null => true,
            DataValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Int(_) => "int64",
            DataValue::Float(_) => "float64",
            DataValue::String(_) => "string",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as a float. NaN yields `None`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) if !f.is_nan() => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => f.write_str("null"),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::Float(v) => write!(f, "{}", v),
            DataValue::String(s) => f.write_str(s),
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DataValue::Null, Into::into)
    }
}

/// A single row of data, keyed by column name.
///
/// A column declared by the dataset but absent from the row reads as null.
pub type DataRow = HashMap<String, DataValue>;

/// A dataset: a header of column names plus rows.
///
/// The header is kept separately from the rows so that a dataset with zero
/// rows still knows which columns it has.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    /// Column names, without duplicates
    columns: Vec<String>,
    /// The data rows
    rows: Vec<DataRow>,
}

impl DataSet {
    /// Creates a new empty dataset without columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an empty dataset with the given header.
    ///
    /// Repeated names are kept once.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let columns = columns
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();

        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a dataset from keyed rows.
    ///
    /// The header is the sorted union of all row keys.
    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        let columns: BTreeSet<&String> = rows.iter().flat_map(|row| row.keys()).collect();
        let columns = columns.into_iter().cloned().collect();
        Self { columns, rows }
    }

    /// Creates a dataset from positional records.
    ///
    /// Every record must have exactly one value per header column.
    pub fn from_records(
        columns: Vec<String>,
        records: Vec<Vec<DataValue>>,
    ) -> Result<Self, DatasetError> {
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(DatasetError::DuplicateColumn(name.clone()));
            }
        }

        let mut rows = Vec::with_capacity(records.len());
        for (row_idx, record) in records.into_iter().enumerate() {
            if record.len() != columns.len() {
                return Err(DatasetError::RowWidth {
                    row: row_idx,
                    expected: columns.len(),
                    actual: record.len(),
                });
            }
            rows.push(columns.iter().cloned().zip(record).collect());
        }

        Ok(Self { columns, rows })
    }

    /// Returns the header of the dataset.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the header contains `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&DataRow> {
        self.rows.get(index)
    }

    /// Adds a row to the dataset.
    ///
    /// Keys not yet in the header are appended to it.
    pub fn add_row(&mut self, row: DataRow) {
        let mut new_columns: Vec<&String> =
            row.keys().filter(|key| !self.has_column(key)).collect();
        new_columns.sort();
        let new_columns: Vec<String> = new_columns.into_iter().cloned().collect();
        self.columns.extend(new_columns);
        self.rows.push(row);
    }
}

impl FromIterator<DataRow> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataRow>>(iter: T) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
