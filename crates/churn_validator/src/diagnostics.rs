//! Built-in diagnostic sinks.
//!
//! - [`TracingSink`]: forwards lines to `tracing` (the default)
//! - [`ConsoleSink`]: colored terminal output
//! - [`MemorySink`]: keeps lines in memory
//! - [`NullSink`]: discards lines

use churn_core::{DiagnosticLevel, DiagnosticSink};
use colored::Colorize;
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

/// Forwards diagnostic lines to the `tracing` subscriber of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: DiagnosticLevel, line: &str) {
        match level {
            DiagnosticLevel::Info | DiagnosticLevel::Success => {
                info!(target: "churn_validator", "{}", line)
            }
            DiagnosticLevel::Warning | DiagnosticLevel::Failure => {
                warn!(target: "churn_validator", "{}", line)
            }
        }
    }
}

/// Prints diagnostic lines to the terminal.
///
/// Colors follow `colored`'s detection, so `NO_COLOR` and non-terminal
/// outputs get plain text. Failures go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Renders a line the way it is printed, without the trailing newline.
    pub fn render(level: DiagnosticLevel, line: &str) -> String {
        match level {
            DiagnosticLevel::Info => format!("{} {}", "ℹ".blue().bold(), line),
            DiagnosticLevel::Warning => format!("{} {}", "⚠".yellow().bold(), line.yellow()),
            DiagnosticLevel::Success => format!("{} {}", "✓".green().bold(), line.green().bold()),
            DiagnosticLevel::Failure => format!("{} {}", "✗".red().bold(), line.red()),
        }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, level: DiagnosticLevel, line: &str) {
        let rendered = Self::render(level, line);
        match level {
            DiagnosticLevel::Failure => eprintln!("{}", rendered),
            _ => println!("{}", rendered),
        }
    }
}

/// Records diagnostic lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(DiagnosticLevel, String)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything emitted so far.
    pub fn lines(&self) -> Vec<(DiagnosticLevel, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the lines emitted at one level.
    pub fn lines_at(&self, level: DiagnosticLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line)
            .collect()
    }

    /// Drops every recorded line.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, level: DiagnosticLevel, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, line.to_string()));
    }
}

/// Discards every diagnostic line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _level: DiagnosticLevel, _line: &str) {}
}
