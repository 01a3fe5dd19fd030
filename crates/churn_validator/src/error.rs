//! Error types for validation operations.
//!
//! [`RuleViolation`] describes a data-quality finding; its `Display` text is
//! what ends up in [`ValidationResult::failures`]. [`DatasetError`] is the
//! only error the validator returns, and only for malformed input.
//!
//! [`ValidationResult::failures`]: churn_core::ValidationResult::failures

use churn_core::{CONSISTENCY_THRESHOLD, Column};
use thiserror::Error;

/// A business rule broken by the dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleViolation {
    /// Required columns absent from the header
    #[error("Missing required columns: [{}]", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Nulls in a key column
    #[error("Column '{column}' contains {count} nulls")]
    NullValues { column: Column, count: usize },

    /// Values outside a column's allowed set
    #[error(
        "Unexpected values in '{column}': [{}]; allowed=[{}]",
        .found.join(", "),
        .allowed.join(", ")
    )]
    UnexpectedValues {
        column: Column,
        found: Vec<String>,
        allowed: Vec<String>,
    },

    /// Unparseable `TotalCharges` on rows that are not brand-new customers
    #[error("'TotalCharges' has {count} non-numeric values where tenure > 0")]
    NonNumericTotalCharges { count: usize },

    /// Negative numbers in a column that must be non-negative
    #[error("'{column}' contains {count} negative values")]
    NegativeValues { column: Column, count: usize },

    /// Numbers above a column's reasonable bound
    #[error("'{column}' exceeds {bound}{} in {count} rows", unit_suffix(.column))]
    AboveBound {
        column: Column,
        bound: f64,
        count: usize,
    },

    /// Nulls in a numeric column
    #[error("'{column}' has {count} nulls")]
    NumericNulls { column: Column, count: usize },

    /// Too many rows where `TotalCharges < MonthlyCharges`
    #[error(
        "'TotalCharges >= MonthlyCharges' holds for {:.3}% of rows; expected >= {:.0}% (violations={violations}/{total})",
        .fraction_ok * 100.0,
        CONSISTENCY_THRESHOLD * 100.0
    )]
    ConsistencyBelowThreshold {
        fraction_ok: f64,
        violations: usize,
        total: usize,
    },

    /// No row has both charges, so consistency cannot be judged
    #[error("Not enough non-null rows to evaluate 'TotalCharges >= MonthlyCharges'")]
    InsufficientComparableRows,

    /// Target values other than Yes/No
    #[error("Unexpected values in 'Churn': [{}] (expected 'Yes'/'No')", .0.join(", "))]
    UnexpectedTargetValues(Vec<String>),

    /// Repeated customer identifiers
    #[error("'customerID' has {count} duplicate values")]
    DuplicateIds { count: usize },
}

fn unit_suffix(column: &Column) -> &'static str {
    match column {
        Column::Tenure => " months (10 years)",
        _ => "",
    }
}

/// Errors for input the validator cannot evaluate.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A numeric column holds a value that is not a number
    #[error("Type mismatch for column '{column}' at row {row}: expected {expected}, found {actual}")]
    TypeMismatch {
        column: Column,
        row: usize,
        expected: &'static str,
        actual: &'static str,
    },

    /// A positional record does not match the header width
    #[error("Row {row} has {actual} values but the header has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The same column name appears twice in a header
    #[error("Duplicate column '{0}' in header")]
    DuplicateColumn(String),
}

impl DatasetError {
    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        column: Column,
        row: usize,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            column,
            row,
            expected,
            actual,
        }
    }
}
