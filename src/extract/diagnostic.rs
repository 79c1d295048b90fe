//! Non-fatal extraction diagnostics.

use std::fmt;

/// A condition worth reporting that does not stop extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The locator matched no table; an empty model was returned.
    TableNotFound { locator: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::TableNotFound { locator } => {
                write!(f, "Html table could not be found with input: {}", locator)
            }
        }
    }
}

/// Receives diagnostics raised during extraction.
pub trait DiagnosticReporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Reports diagnostics through the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl DiagnosticReporter for LogReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

/// Keeps diagnostics for later inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take the collected diagnostics, leaving the reporter empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticReporter for CollectingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = Diagnostic::TableNotFound {
            locator: "#orders".to_string(),
        };
        assert_eq!(
            d.to_string(),
            "Html table could not be found with input: #orders"
        );
    }

    #[test]
    fn test_collecting_reporter() {
        let mut reporter = CollectingReporter::new();
        assert!(reporter.is_empty());

        reporter.report(Diagnostic::TableNotFound {
            locator: "x".to_string(),
        });
        assert_eq!(reporter.diagnostics().len(), 1);

        let taken = reporter.take();
        assert_eq!(taken.len(), 1);
        assert!(reporter.is_empty());
    }
}
