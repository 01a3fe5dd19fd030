//! Dataset-level quality checks.
//!
//! This module handles the checks that look across rows or columns:
//! - Consistency: `TotalCharges >= MonthlyCharges` on enough comparable rows
//! - Target sanity: `Churn` only holds `Yes`/`No`
//! - Uniqueness: duplicate `customerID` values

use crate::constraints::disallowed_values;
use crate::{ChurnFrame, DataValue, RuleViolation};
use churn_core::{CHURN_VALUES, CONSISTENCY_THRESHOLD, Column};
use std::collections::HashSet;

/// Validates dataset-level quality checks.
pub struct QualityValidator;

impl QualityValidator {
    /// Creates a new quality validator.
    pub fn new() -> Self {
        Self
    }

    /// Checks that `TotalCharges >= MonthlyCharges` holds often enough.
    ///
    /// Only rows where both charges are numbers take part. Having no such row
    /// at all is itself a failure.
    pub fn validate_consistency(&self, frame: &ChurnFrame<'_>) -> Option<RuleViolation> {
        let mut total = 0usize;
        let mut violations = 0usize;

        for record in frame.records() {
            if let (Some(total_charges), Some(monthly)) =
                (record.total_charges(), record.monthly_charges())
            {
                total += 1;
                if total_charges < monthly {
                    violations += 1;
                }
            }
        }

        if total == 0 {
            return Some(RuleViolation::InsufficientComparableRows);
        }

        let fraction_ok = 1.0 - (violations as f64 / total as f64);
        if fraction_ok < CONSISTENCY_THRESHOLD {
            return Some(RuleViolation::ConsistencyBelowThreshold {
                fraction_ok,
                violations,
                total,
            });
        }

        None
    }

    /// Checks that the `Churn` target only holds `Yes` or `No`.
    pub fn validate_target(&self, frame: &ChurnFrame<'_>) -> Option<RuleViolation> {
        let extras = disallowed_values(frame, Column::Churn, CHURN_VALUES);
        if extras.is_empty() {
            None
        } else {
            Some(RuleViolation::UnexpectedTargetValues(extras))
        }
    }

    /// Checks that `customerID` values are unique.
    pub fn validate_uniqueness(&self, frame: &ChurnFrame<'_>) -> Option<RuleViolation> {
        let count = self.count_duplicates(frame, Column::CustomerId);
        if count > 0 {
            Some(RuleViolation::DuplicateIds { count })
        } else {
            None
        }
    }

    /// Counts the values of a column that repeat an earlier row.
    ///
    /// Nulls compare equal to each other, and numbers compare by value so
    /// that `1` and `1.0` collide.
    fn count_duplicates(&self, frame: &ChurnFrame<'_>, column: Column) -> usize {
        let mut seen = HashSet::new();
        frame
            .column(column)
            .filter(|value| !seen.insert(ValueKey::from(*value)))
            .count()
    }
}

impl Default for QualityValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Hashable identity of a [`DataValue`].
#[derive(Debug, PartialEq, Eq, Hash)]
enum ValueKey<'a> {
    Null,
    Number(u64),
    Text(&'a str),
}

impl<'a> From<&'a DataValue> for ValueKey<'a> {
    fn from(value: &'a DataValue) -> Self {
        if value.is_null() {
            return ValueKey::Null;
        }
        match value {
            DataValue::String(s) => ValueKey::Text(s),
            // +0.0 and -0.0 are the same number
            other => match other.as_float() {
                Some(n) if n == 0.0 => ValueKey::Number(0.0f64.to_bits()),
                Some(n) => ValueKey::Number(n.to_bits()),
                None => ValueKey::Null,
            },
        }
    }
}
