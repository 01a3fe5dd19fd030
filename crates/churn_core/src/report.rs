//! Validation result type.

use crate::Result;
use serde::Serialize;

/// Outcome of validating a churn dataset.
///
/// A result is valid exactly when it carries no failures. Failures keep the
/// order in which the checks recorded them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    failures: Vec<String>,
}

impl ValidationResult {
    /// Creates a passing result.
    pub fn passed() -> Self {
        Self {
            is_valid: true,
            failures: Vec::new(),
        }
    }

    /// Creates a result from collected failures.
    pub fn from_failures(failures: Vec<String>) -> Self {
        Self {
            is_valid: failures.is_empty(),
            failures,
        }
    }

    /// Returns true if no check failed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the failure messages in the order they were recorded.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Splits the result into `(is_valid, failures)`.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.is_valid, self.failures)
    }

    /// Renders the result as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::passed()
    }
}
