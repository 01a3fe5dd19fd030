//! # Churn Core
//!
//! Core types for validating the Telco customer churn dataset.
//!
//! This crate holds the fixed "contract" the dataset must satisfy and the types
//! shared with the validation engine:
//!
//! - **Column**: the 11 required columns, addressed by a closed enum
//! - **Rules**: allowed value sets, numeric bounds and the consistency threshold
//! - **ValidationResult**: the pass/fail verdict with its ordered failure messages
//! - **DiagnosticSink**: the side channel for progress and summary lines
//!
//! ## Example
//!
//! ```rust
//! use churn_core::{Column, ValidationResult};
//!
//! let column: Column = "MonthlyCharges".parse().unwrap();
//! assert_eq!(column, Column::MonthlyCharges);
//!
//! let result = ValidationResult::from_failures(vec![
//!     "'customerID' has 2 duplicate values".to_string(),
//! ]);
//! assert!(!result.is_valid());
//! ```

pub mod diagnostics;
pub mod error;
pub mod report;
pub mod rules;
pub mod schema;

pub use diagnostics::*;
pub use error::*;
pub use report::*;
pub use rules::*;
pub use schema::*;
