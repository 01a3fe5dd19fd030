//! Diagnostic output traits.
//!
//! Validation reports progress and a final summary through a [`DiagnosticSink`].
//! The lines are informational: they never influence the [`ValidationResult`]
//! returned to the caller.
//!
//! [`ValidationResult`]: crate::ValidationResult

use std::fmt;

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    /// Progress through the validation stages
    Info,
    /// A tolerated anomaly that does not fail validation
    Warning,
    /// The passing banner
    Success,
    /// The failing banner and its failure lines, or an aborted stage
    Failure,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticLevel::Info => "info",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Success => "success",
            DiagnosticLevel::Failure => "failure",
        };
        f.write_str(label)
    }
}

/// Receiver of diagnostic lines emitted during validation.
///
/// # Example
///
/// ```rust
/// use churn_core::{DiagnosticLevel, DiagnosticSink};
///
/// struct StderrSink;
///
/// impl DiagnosticSink for StderrSink {
///     fn emit(&self, level: DiagnosticLevel, line: &str) {
///         eprintln!("[{}] {}", level, line);
///     }
/// }
/// ```
pub trait DiagnosticSink: Send + Sync {
    /// Emits a single line.
    fn emit(&self, level: DiagnosticLevel, line: &str);
}
