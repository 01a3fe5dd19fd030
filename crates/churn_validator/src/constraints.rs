//! Column constraint validation logic.
//!
//! This module handles the per-column rules of the churn dataset:
//! - Null checks on key and numeric columns
//! - Allowed value sets for categorical columns
//! - `TotalCharges` numeric coercion with the tenure-zero exception
//! - Non-negativity and reasonable upper bounds for numeric columns

use crate::{ChurnFrame, ChurnRecord, DataValue, RuleViolation};
use churn_core::{
    Column, KEY_NOT_NULL_COLUMNS, MAX_MONTHLY_CHARGES, MAX_TENURE_MONTHS, VALUE_SET_RULES,
    sorted_values,
};
use std::collections::BTreeSet;

/// Outcome of the `TotalCharges` coercion check.
#[derive(Debug, Clone, PartialEq)]
pub enum TotalChargesCheck {
    /// Every non-null value parsed as a number
    Clean,
    /// Non-numeric values exist, but none on a row with `tenure > 0`
    Tolerated { non_numeric: usize },
    /// Non-numeric values on rows with `tenure > 0`
    Violation(RuleViolation),
}

/// Validates per-column constraints on a resolved dataset.
pub struct ConstraintValidator;

impl ConstraintValidator {
    /// Creates a new constraint validator.
    pub fn new() -> Self {
        Self
    }

    /// Checks `customerID`, `tenure` and `MonthlyCharges` for nulls.
    pub fn validate_key_nulls(&self, frame: &ChurnFrame<'_>) -> Vec<RuleViolation> {
        KEY_NOT_NULL_COLUMNS
            .into_iter()
            .filter_map(|column| {
                let count = frame.null_count(column);
                (count > 0).then_some(RuleViolation::NullValues { column, count })
            })
            .collect()
    }

    /// Checks every categorical column against its allowed values.
    pub fn validate_value_sets(&self, frame: &ChurnFrame<'_>) -> Vec<RuleViolation> {
        VALUE_SET_RULES
            .into_iter()
            .filter_map(|(column, allowed)| {
                let found = disallowed_values(frame, column, allowed);
                if found.is_empty() {
                    None
                } else {
                    Some(RuleViolation::UnexpectedValues {
                        column,
                        found,
                        allowed: sorted_values(allowed),
                    })
                }
            })
            .collect()
    }

    /// Checks that `TotalCharges` is numeric except for brand-new customers.
    ///
    /// Rows with `tenure == 0` may carry a blank or otherwise non-numeric
    /// total. Rows with a null tenure are neither excused nor flagged.
    pub fn validate_total_charges(&self, frame: &ChurnFrame<'_>) -> TotalChargesCheck {
        let mut non_numeric = 0;
        let mut with_tenure = 0;

        for record in frame.records() {
            if !record.has_non_numeric_total_charges() {
                continue;
            }
            non_numeric += 1;
            if record.tenure().is_some_and(|t| t > 0.0) {
                with_tenure += 1;
            }
        }

        if with_tenure > 0 {
            TotalChargesCheck::Violation(RuleViolation::NonNumericTotalCharges {
                count: with_tenure,
            })
        } else if non_numeric > 0 {
            TotalChargesCheck::Tolerated { non_numeric }
        } else {
            TotalChargesCheck::Clean
        }
    }

    /// Checks that `tenure`, `MonthlyCharges` and parsed `TotalCharges` are
    /// not negative.
    pub fn validate_non_negative(&self, frame: &ChurnFrame<'_>) -> Vec<RuleViolation> {
        let mut errors = Vec::new();

        let numeric_columns = [
            (Column::Tenure, count_where(frame, |r| r.tenure(), |v| v < 0.0)),
            (
                Column::MonthlyCharges,
                count_where(frame, |r| r.monthly_charges(), |v| v < 0.0),
            ),
            (
                Column::TotalCharges,
                count_where(frame, |r| r.total_charges(), |v| v < 0.0),
            ),
        ];

        for (column, count) in numeric_columns {
            if count > 0 {
                errors.push(RuleViolation::NegativeValues { column, count });
            }
        }

        errors
    }

    /// Checks `tenure` and `MonthlyCharges` against their upper bounds.
    pub fn validate_bounds(&self, frame: &ChurnFrame<'_>) -> Vec<RuleViolation> {
        let mut errors = Vec::new();

        let tenure = count_where(frame, |r| r.tenure(), |v| v > MAX_TENURE_MONTHS);
        if tenure > 0 {
            errors.push(RuleViolation::AboveBound {
                column: Column::Tenure,
                bound: MAX_TENURE_MONTHS,
                count: tenure,
            });
        }

        let charges = count_where(frame, |r| r.monthly_charges(), |v| v > MAX_MONTHLY_CHARGES);
        if charges > 0 {
            errors.push(RuleViolation::AboveBound {
                column: Column::MonthlyCharges,
                bound: MAX_MONTHLY_CHARGES,
                count: charges,
            });
        }

        errors
    }

    /// Checks the numeric columns for nulls.
    ///
    /// This overlaps with [`validate_key_nulls`](Self::validate_key_nulls) and
    /// reports the same columns a second time under its own wording.
    pub fn validate_numeric_nulls(&self, frame: &ChurnFrame<'_>) -> Vec<RuleViolation> {
        [Column::Tenure, Column::MonthlyCharges]
            .into_iter()
            .filter_map(|column| {
                let count = frame.null_count(column);
                (count > 0).then_some(RuleViolation::NumericNulls { column, count })
            })
            .collect()
    }
}

impl Default for ConstraintValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the distinct non-null values of a column outside `allowed`.
///
/// Matching is exact. Non-string values are never allowed and are reported by
/// their text.
pub(crate) fn disallowed_values(
    frame: &ChurnFrame<'_>,
    column: Column,
    allowed: &[&str],
) -> Vec<String> {
    let found: BTreeSet<String> = frame
        .column(column)
        .filter(|value| !value.is_null())
        .filter(|value| match value {
            DataValue::String(s) => !allowed.contains(&s.as_str()),
            _ => true,
        })
        .map(|value| value.to_string())
        .collect();

    found.into_iter().collect()
}

fn count_where(
    frame: &ChurnFrame<'_>,
    field: impl Fn(&ChurnRecord<'_>) -> Option<f64>,
    predicate: impl Fn(f64) -> bool,
) -> usize {
    frame
        .records()
        .filter_map(field)
        .filter(|value| predicate(*value))
        .count()
}
