//! The fixed column schema of the churn dataset.
//!
//! Every dataset handed to the validator must carry all of these columns. The
//! header text is matched exactly, including case.

use crate::ChurnError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A required column of the churn dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    /// Customer identifier, expected to be unique
    #[serde(rename = "customerID")]
    CustomerId,
    #[serde(rename = "gender")]
    Gender,
    Partner,
    Dependents,
    PhoneService,
    InternetService,
    Contract,
    /// Months the customer has stayed
    #[serde(rename = "tenure")]
    Tenure,
    MonthlyCharges,
    /// Cumulative charges; blank for brand-new customers
    TotalCharges,
    /// Prediction target
    Churn,
}

impl Column {
    /// All required columns, in schema order.
    pub const ALL: [Column; 11] = [
        Column::CustomerId,
        Column::Gender,
        Column::Partner,
        Column::Dependents,
        Column::PhoneService,
        Column::InternetService,
        Column::Contract,
        Column::Tenure,
        Column::MonthlyCharges,
        Column::TotalCharges,
        Column::Churn,
    ];

    /// Number of required columns.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the exact header text of this column.
    pub fn name(self) -> &'static str {
        match self {
            Column::CustomerId => "customerID",
            Column::Gender => "gender",
            Column::Partner => "Partner",
            Column::Dependents => "Dependents",
            Column::PhoneService => "PhoneService",
            Column::InternetService => "InternetService",
            Column::Contract => "Contract",
            Column::Tenure => "tenure",
            Column::MonthlyCharges => "MonthlyCharges",
            Column::TotalCharges => "TotalCharges",
            Column::Churn => "Churn",
        }
    }

    /// Returns the position of this column in [`Column::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the columns that must hold numbers (or nulls).
    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Tenure | Column::MonthlyCharges)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = ChurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.name() == s)
            .ok_or_else(|| ChurnError::UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_schema_order() {
        for (position, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), position);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("customerID".parse::<Column>().unwrap(), Column::CustomerId);
        assert_eq!("tenure".parse::<Column>().unwrap(), Column::Tenure);
        assert!("CustomerID".parse::<Column>().is_err());
        assert!("Tenure".parse::<Column>().is_err());
        assert!(" tenure".parse::<Column>().is_err());
    }

    #[test]
    fn test_unknown_column_error() {
        let err = "SeniorCitizen".parse::<Column>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown column: 'SeniorCitizen'");
    }

    #[test]
    fn test_serde_uses_header_names() {
        let json = serde_json::to_string(&Column::CustomerId).unwrap();
        assert_eq!(json, "\"customerID\"");

        let column: Column = serde_json::from_str("\"MonthlyCharges\"").unwrap();
        assert_eq!(column, Column::MonthlyCharges);

        for column in Column::ALL {
            let json = serde_json::to_string(&column).unwrap();
            assert_eq!(json, format!("\"{}\"", column.name()));
        }
    }

    #[test]
    fn test_numeric_columns() {
        let numeric: Vec<Column> = Column::ALL.into_iter().filter(|c| c.is_numeric()).collect();
        assert_eq!(numeric, vec![Column::Tenure, Column::MonthlyCharges]);
    }
}
