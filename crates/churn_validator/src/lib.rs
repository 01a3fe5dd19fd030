//! # Churn Validator
//!
//! Data-quality gate for the Telco customer churn dataset. This crate checks a
//! dataset before it reaches modeling:
//!
//! - Schema validation (required columns, checked before anything else)
//! - Constraint validation (nulls, allowed values, numeric ranges)
//! - The tenure-zero exception for blank `TotalCharges`
//! - Quality checks (charge consistency, target values, duplicate ids)
//!
//! ## Example
//!
//! ```rust
//! use churn_validator::{ChurnValidator, DataRow, DataSet, NullSink};
//! use std::sync::Arc;
//!
//! let rows: Vec<DataRow> = serde_json::from_value(serde_json::json!([{
//!     "customerID": "7590-VHVEG",
//!     "gender": "Female",
//!     "Partner": "Yes",
//!     "Dependents": "No",
//!     "PhoneService": "No",
//!     "InternetService": "DSL",
//!     "Contract": "Month-to-month",
//!     "tenure": 1,
//!     "MonthlyCharges": 29.85,
//!     "TotalCharges": "29.85",
//!     "Churn": "No"
//! }]))
//! .unwrap();
//!
//! let validator = ChurnValidator::with_sink(Arc::new(NullSink));
//! let result = validator.validate(&DataSet::from_rows(rows)).unwrap();
//!
//! if result.is_valid() {
//!     println!("Validation passed!");
//! } else {
//!     println!("Validation failed: {:?}", result.failures());
//! }
//! ```

mod constraints;
mod dataset;
mod diagnostics;
mod engine;
mod error;
mod quality;
mod schema;

pub use constraints::*;
pub use dataset::*;
pub use diagnostics::*;
pub use engine::*;
pub use error::*;
pub use quality::*;
pub use schema::*;

pub use churn_core::{Column, DiagnosticLevel, DiagnosticSink, ValidationResult};
