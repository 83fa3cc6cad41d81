//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! violations found in a template, with optional source location tracking
//! for precise error reporting.

use super::rule::{RuleId, Severity};
use super::span::Span;

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional source location.
    pub span: Option<Span>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            span: None,
        }
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_creation() {
        let diag = LintDiagnostic::new(RuleId::new("test-rule"), Severity::Error, "Test message");

        assert_eq!(diag.rule_id, RuleId::new("test-rule"));
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "Test message");
        assert!(diag.span.is_none());
    }

    #[test]
    fn diagnostic_with_span() {
        let diag = LintDiagnostic::new(RuleId::new("test"), Severity::Warning, "Test message")
            .with_span(Span::new("App.vue", 10, 3, 10, 8));

        let span = diag.span.unwrap();
        assert_eq!(span.start_line, 10);
        assert_eq!(span.start_col, 3);
    }
}
