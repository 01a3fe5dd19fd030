//! Schema validation and typed row resolution.
//!
//! The schema check compares the dataset header with the required columns.
//! Once it passes, [`ChurnFrame::resolve`] turns the keyed rows into arrays
//! indexed by [`Column`], so the rule checks never look up a column by name.

use crate::{DataSet, DataValue, DatasetError, RuleViolation};
use churn_core::Column;

static NULL: DataValue = DataValue::Null;

/// Validates the dataset header against the required columns.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Creates a new schema validator.
    pub fn new() -> Self {
        Self
    }

    /// Returns the required columns absent from the header, sorted by name.
    pub fn missing_columns(&self, dataset: &DataSet) -> Vec<String> {
        let mut missing: Vec<String> = Column::ALL
            .iter()
            .map(|column| column.name())
            .filter(|name| !dataset.has_column(name))
            .map(String::from)
            .collect();
        missing.sort();
        missing
    }

    /// Runs the schema check.
    ///
    /// Returns at most one violation listing every missing column.
    pub fn validate(&self, dataset: &DataSet) -> Option<RuleViolation> {
        let missing = self.missing_columns(dataset);
        if missing.is_empty() {
            None
        } else {
            Some(RuleViolation::MissingColumns(missing))
        }
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// One dataset row with every required column resolved.
#[derive(Debug, Clone)]
pub struct ChurnRecord<'a> {
    values: [&'a DataValue; Column::COUNT],
    tenure: Option<f64>,
    monthly_charges: Option<f64>,
    total_charges: Option<f64>,
}

impl<'a> ChurnRecord<'a> {
    /// Returns the raw value of a column. Absent keys read as null.
    pub fn get(&self, column: Column) -> &'a DataValue {
        self.values[column.index()]
    }

    /// Returns `tenure` as a number, or `None` when null.
    pub fn tenure(&self) -> Option<f64> {
        self.tenure
    }

    /// Returns `MonthlyCharges` as a number, or `None` when null.
    pub fn monthly_charges(&self) -> Option<f64> {
        self.monthly_charges
    }

    /// Returns `TotalCharges` parsed with [`parse_numeric`].
    pub fn total_charges(&self) -> Option<f64> {
        self.total_charges
    }

    /// Returns true if `TotalCharges` holds something that is not a number.
    pub fn has_non_numeric_total_charges(&self) -> bool {
        self.total_charges.is_none() && !self.get(Column::TotalCharges).is_null()
    }
}

/// A schema-checked view over a dataset.
#[derive(Debug, Clone)]
pub struct ChurnFrame<'a> {
    records: Vec<ChurnRecord<'a>>,
}

impl<'a> ChurnFrame<'a> {
    /// Resolves every row of a dataset that passed the schema check.
    ///
    /// Fails when `tenure` or `MonthlyCharges` holds anything other than a
    /// number or null. `TotalCharges` is parsed leniently instead.
    pub fn resolve(dataset: &'a DataSet) -> Result<Self, DatasetError> {
        let mut records = Vec::with_capacity(dataset.len());

        for (row_idx, row) in dataset.rows().enumerate() {
            let values = Column::ALL.map(|column| row.get(column.name()).unwrap_or(&NULL));
            let tenure = numeric_cell(values[Column::Tenure.index()], Column::Tenure, row_idx)?;
            let monthly_charges = numeric_cell(
                values[Column::MonthlyCharges.index()],
                Column::MonthlyCharges,
                row_idx,
            )?;
            let total_charges = parse_numeric(values[Column::TotalCharges.index()]);

            records.push(ChurnRecord {
                values,
                tenure,
                monthly_charges,
                total_charges,
            });
        }

        Ok(Self { records })
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn records(&self) -> impl Iterator<Item = &ChurnRecord<'a>> {
        self.records.iter()
    }

    /// Returns an iterator over the raw values of one column.
    pub fn column(&self, column: Column) -> impl Iterator<Item = &'a DataValue> + '_ {
        self.records.iter().map(move |record| record.get(column))
    }

    /// Counts the null values of one column.
    pub fn null_count(&self, column: Column) -> usize {
        self.column(column).filter(|value| value.is_null()).count()
    }
}

/// Reads a value from a column that must be numeric.
fn numeric_cell(
    value: &DataValue,
    column: Column,
    row: usize,
) -> Result<Option<f64>, DatasetError> {
    match value {
        DataValue::String(_) => Err(DatasetError::type_mismatch(
            column,
            row,
            "number",
            value.type_name(),
        )),
        other => Ok(other.as_float()),
    }
}

/// Parses a value as a number.
///
/// Numbers pass through; strings are parsed after trimming surrounding
/// whitespace. Nulls, NaN and unparseable strings yield `None`.
pub fn parse_numeric(value: &DataValue) -> Option<f64> {
    match value {
        DataValue::String(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
        other => other.as_float(),
    }
}
