//! Per-request sink for recoverable field problems.

use tracing::warn;

/// A field that was skipped while building a submission item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based data row in the Variant file.
    pub row: usize,
    pub column: String,
    pub value: String,
    pub message: String,
}

/// Collects skipped fields for one conversion.
///
/// Each entry is also emitted as a `warn` event in the caller's span. The
/// cell value is kept out of the event; callers decide whether to show it.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic {
            row,
            column: column.into(),
            value: value.into(),
            message: message.into(),
        };
        warn!(
            row = diagnostic.row,
            column = %diagnostic.column,
            "{}",
            diagnostic.message
        );
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Entries recorded for one column.
    pub fn for_column<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.entries.iter().filter(move |entry| entry.column == column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
