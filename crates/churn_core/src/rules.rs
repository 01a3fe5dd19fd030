//! Business rules of the churn dataset.
//!
//! The value sets, bounds and thresholds below are fixed properties of the
//! dataset, not settings.

use crate::Column;

/// Allowed values of `gender`.
pub const GENDER_VALUES: &[&str] = &["Male", "Female"];

/// Allowed values of the yes/no flag columns.
pub const YES_NO_VALUES: &[&str] = &["Yes", "No"];

/// Allowed values of `Contract`.
pub const CONTRACT_VALUES: &[&str] = &["Month-to-month", "One year", "Two year"];

/// Allowed values of `InternetService`.
pub const INTERNET_SERVICE_VALUES: &[&str] = &["DSL", "Fiber optic", "No"];

/// Allowed values of the `Churn` target.
pub const CHURN_VALUES: &[&str] = &["Yes", "No"];

/// Categorical columns and their allowed values, in the order they are checked.
pub const VALUE_SET_RULES: [(Column, &[&str]); 6] = [
    (Column::Gender, GENDER_VALUES),
    (Column::Partner, YES_NO_VALUES),
    (Column::Dependents, YES_NO_VALUES),
    (Column::PhoneService, YES_NO_VALUES),
    (Column::Contract, CONTRACT_VALUES),
    (Column::InternetService, INTERNET_SERVICE_VALUES),
];

/// Columns that must not contain nulls, in the order they are checked.
pub const KEY_NOT_NULL_COLUMNS: [Column; 3] =
    [Column::CustomerId, Column::Tenure, Column::MonthlyCharges];

/// Upper bound for `tenure`, in months (10 years).
pub const MAX_TENURE_MONTHS: f64 = 120.0;

/// Upper bound for `MonthlyCharges`.
pub const MAX_MONTHLY_CHARGES: f64 = 200.0;

/// Minimum share of comparable rows where `TotalCharges >= MonthlyCharges`.
pub const CONSISTENCY_THRESHOLD: f64 = 0.95;

/// Returns the allowed values sorted, for failure messages.
pub fn sorted_values(values: &[&str]) -> Vec<String> {
    let mut sorted: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    sorted.sort();
    sorted
}
