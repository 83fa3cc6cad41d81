//! Running rules over documents.

use std::path::PathBuf;

use super::diagnostic::LintDiagnostic;
use super::registry::RuleRegistry;
use super::rule::Severity;
use crate::template::TemplateDocument;

/// Diagnostics for one document.
#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub diagnostics: Vec<LintDiagnostic>,
}

/// Applies every registered rule to documents.
pub struct Linter {
    registry: RuleRegistry,
}

impl Linter {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Check one document, rules in id order.
    pub fn lint_document(&self, document: &TemplateDocument) -> DocumentReport {
        let diagnostics: Vec<_> = self
            .registry
            .iter()
            .flat_map(|rule| rule.check(document))
            .collect();

        tracing::debug!(
            "{}: {} diagnostic(s)",
            document.path.display(),
            diagnostics.len()
        );

        DocumentReport {
            path: document.path.clone(),
            diagnostics,
        }
    }

    /// Check documents in input order.
    pub fn lint_documents<'a, I>(&self, documents: I) -> Vec<DocumentReport>
    where
        I: IntoIterator<Item = &'a TemplateDocument>,
    {
        documents
            .into_iter()
            .map(|document| self.lint_document(document))
            .collect()
    }
}

/// Flatten reports into one diagnostic list, keeping order.
pub fn collect_diagnostics(reports: &[DocumentReport]) -> Vec<LintDiagnostic> {
    reports
        .iter()
        .flat_map(|report| report.diagnostics.iter().cloned())
        .collect()
}

/// Whether a run with these diagnostics fails.
///
/// Errors always fail; warnings fail only in strict mode.
pub fn should_fail(diagnostics: &[LintDiagnostic], strict: bool) -> bool {
    let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
    let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);
    has_errors || (strict && has_warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;
    use crate::template::{SourceLocation, Token};

    fn doc(path: &str, types: &[&str]) -> TemplateDocument {
        TemplateDocument::from_tokens(
            path,
            types
                .iter()
                .enumerate()
                .map(|(i, t)| Token::new(*t, SourceLocation::new((i + 1, 0), (i + 1, 3))))
                .collect(),
        )
    }

    #[test]
    fn lints_documents_in_order() {
        let linter = Linter::new(RuleRegistry::with_defaults().unwrap());
        let docs = [
            doc("b.vue", &["PugEach"]),
            doc("a.vue", &["Text", "PugIf", "PugMixin"]),
        ];

        let reports = linter.lint_documents(&docs);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].path, PathBuf::from("b.vue"));
        assert_eq!(reports[0].diagnostics.len(), 1);
        assert_eq!(reports[1].diagnostics.len(), 2);

        let all = collect_diagnostics(&reports);
        let messages: Vec<_> = all.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Using pug each loops is forbidden.",
                "Using pug if statements is forbidden.",
                "Using pug mixins is forbidden.",
            ]
        );
    }

    #[test]
    fn empty_registry_reports_nothing() {
        let linter = Linter::new(RuleRegistry::new());
        let report = linter.lint_document(&doc("a.vue", &["PugIf"]));
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn failure_policy() {
        let error = LintDiagnostic::new(RuleId::new("r"), Severity::Error, "e");
        let warning = LintDiagnostic::new(RuleId::new("r"), Severity::Warning, "w");

        assert!(!should_fail(&[], true));
        assert!(should_fail(&[error], false));
        assert!(!should_fail(&[warning.clone()], false));
        assert!(should_fail(&[warning], true));
    }
}
