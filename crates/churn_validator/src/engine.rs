//! Main validation engine.
//!
//! This module provides the [`ChurnValidator`] that runs every check in a fixed
//! order and collects the failures into a [`ValidationResult`].

use crate::{
    ChurnFrame, ConstraintValidator, DataSet, DatasetError, QualityValidator, RuleViolation,
    SchemaValidator, TotalChargesCheck, TracingSink,
};
use churn_core::{DiagnosticLevel, DiagnosticSink, ValidationResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Validation engine for the churn dataset.
///
/// Runs the schema check, the column constraints and the dataset-level quality
/// checks, and reports progress to a [`DiagnosticSink`].
///
/// # Example
///
/// ```rust
/// use churn_validator::{ChurnValidator, DataSet, MemorySink};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let validator = ChurnValidator::with_sink(sink.clone());
///
/// let dataset = DataSet::with_columns(["customerID", "gender"]);
/// let result = validator.validate(&dataset).unwrap();
///
/// assert!(!result.is_valid());
/// assert_eq!(result.failures().len(), 1);
/// assert!(!sink.lines().is_empty());
/// ```
pub struct ChurnValidator {
    schema_validator: SchemaValidator,
    constraint_validator: ConstraintValidator,
    quality_validator: QualityValidator,
    sink: Arc<dyn DiagnosticSink>,
}

impl ChurnValidator {
    /// Creates a validator that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Creates a validator that reports to the given sink.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            schema_validator: SchemaValidator::new(),
            constraint_validator: ConstraintValidator::new(),
            quality_validator: QualityValidator::new(),
            sink,
        }
    }

    /// Validates a dataset.
    ///
    /// Data-quality problems are returned as failures inside the
    /// [`ValidationResult`]. `Err` is reserved for input the rules cannot be
    /// evaluated on, such as text in the `tenure` column.
    pub fn validate(&self, dataset: &DataSet) -> Result<ValidationResult, DatasetError> {
        let start = Instant::now();
        let mut failures: Vec<RuleViolation> = Vec::new();

        self.info("Starting churn data validation...");

        // 1. Schema (a failure here stops everything)
        self.info("Validating schema and required columns...");
        if let Some(violation) = self.schema_validator.validate(dataset) {
            failures.push(violation);
            self.sink
                .emit(DiagnosticLevel::Failure, "Schema validation failed.");
            return Ok(self.finish(failures, dataset, start));
        }

        let frame = ChurnFrame::resolve(dataset)?;

        // 2. Key nulls
        failures.extend(self.constraint_validator.validate_key_nulls(&frame));

        // 3. Value sets
        self.info("Validating business logic constraints (value sets)...");
        failures.extend(self.constraint_validator.validate_value_sets(&frame));

        // 4-7. Numeric columns
        self.info("Validating numeric ranges and constraints...");
        match self.constraint_validator.validate_total_charges(&frame) {
            TotalChargesCheck::Violation(violation) => failures.push(violation),
            TotalChargesCheck::Tolerated { non_numeric } => self.sink.emit(
                DiagnosticLevel::Warning,
                &format!("{non_numeric} non-numeric 'TotalCharges' for tenure==0; allowed"),
            ),
            TotalChargesCheck::Clean => {}
        }
        failures.extend(self.constraint_validator.validate_non_negative(&frame));
        failures.extend(self.constraint_validator.validate_bounds(&frame));
        failures.extend(self.constraint_validator.validate_numeric_nulls(&frame));

        // 8-10. Consistency, target and uniqueness
        self.info("Validating data consistency...");
        failures.extend(self.quality_validator.validate_consistency(&frame));
        failures.extend(self.quality_validator.validate_target(&frame));
        failures.extend(self.quality_validator.validate_uniqueness(&frame));

        Ok(self.finish(failures, dataset, start))
    }

    /// Emits the final banner and builds the result.
    fn finish(
        &self,
        violations: Vec<RuleViolation>,
        dataset: &DataSet,
        start: Instant,
    ) -> ValidationResult {
        let failures: Vec<String> = violations.iter().map(|v| v.to_string()).collect();

        if failures.is_empty() {
            self.sink
                .emit(DiagnosticLevel::Success, "Data validation PASSED");
        } else {
            self.sink
                .emit(DiagnosticLevel::Failure, "Data validation FAILED");
            for failure in &failures {
                self.sink
                    .emit(DiagnosticLevel::Failure, &format!("  - {}", failure));
            }
        }

        debug!(
            rows = dataset.len(),
            failures = failures.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "churn validation finished"
        );

        ValidationResult::from_failures(failures)
    }

    fn info(&self, line: &str) {
        self.sink.emit(DiagnosticLevel::Info, line);
    }
}

impl Default for ChurnValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a dataset with a default [`ChurnValidator`].
pub fn validate_churn_data(dataset: &DataSet) -> Result<ValidationResult, DatasetError> {
    ChurnValidator::new().validate(dataset)
}
