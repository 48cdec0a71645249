//! Validation markers passed to `on_validate` hooks.

use serde::{Deserialize, Serialize};

/// Severity of a validation marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSeverity {
    /// Faded-out suggestion.
    Hint,
    /// Informational note.
    Info,
    /// Something suspicious that does not prevent use.
    Warning,
    /// A problem that makes the document invalid.
    Error,
}

impl MarkerSeverity {
    /// Returns whether a marker of this severity invalidates the document.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// A diagnostic attached to a range of the document.
///
/// Lines and columns are 1-based, matching what editors display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker severity.
    pub severity: MarkerSeverity,
    /// Message shown to the user.
    pub message: String,
    /// First line of the range.
    pub start_line: u32,
    /// First column of the range.
    pub start_column: u32,
    /// Last line of the range.
    pub end_line: u32,
    /// Column after the last character of the range.
    pub end_column: u32,
    /// Tool that produced the marker (`"json"`, `"eslint"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Tool-specific diagnostic code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Marker {
    /// Creates a marker covering a single line range.
    pub fn new(
        severity: MarkerSeverity,
        message: impl Into<String>,
        line: u32,
        start_column: u32,
        end_column: u32,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            start_line: line,
            start_column,
            end_line: line,
            end_column,
            source: None,
            code: None,
        }
    }

    /// Creates an error marker.
    pub fn error(message: impl Into<String>, line: u32, start_column: u32, end_column: u32) -> Self {
        Self::new(MarkerSeverity::Error, message, line, start_column, end_column)
    }

    /// Creates a warning marker.
    pub fn warning(
        message: impl Into<String>,
        line: u32,
        start_column: u32,
        end_column: u32,
    ) -> Self {
        Self::new(MarkerSeverity::Warning, message, line, start_column, end_column)
    }

    /// Extends the range to end on another line.
    pub fn ending_at(mut self, end_line: u32, end_column: u32) -> Self {
        self.end_line = end_line;
        self.end_column = end_column;
        self
    }

    /// Sets the producing tool.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the diagnostic code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Per-severity marker counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSummary {
    /// Number of hints.
    pub hints: usize,
    /// Number of infos.
    pub infos: usize,
    /// Number of warnings.
    pub warnings: usize,
    /// Number of errors.
    pub errors: usize,
}

impl MarkerSummary {
    /// Returns whether the document has no blocking markers.
    pub fn is_valid(&self) -> bool {
        self.errors == 0
    }

    /// Total number of markers.
    pub fn total(&self) -> usize {
        self.hints + self.infos + self.warnings + self.errors
    }
}

/// Counts markers by severity.
pub fn summarize(markers: &[Marker]) -> MarkerSummary {
    markers
        .iter()
        .fold(MarkerSummary::default(), |mut summary, marker| {
            match marker.severity {
                MarkerSeverity::Hint => summary.hints += 1,
                MarkerSeverity::Info => summary.infos += 1,
                MarkerSeverity::Warning => summary.warnings += 1,
                MarkerSeverity::Error => summary.errors += 1,
            }
            summary
        })
}
