//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Warning, Error)
//! - [`RuleDocs`] - Documentation metadata used by the rules index

use super::diagnostic::LintDiagnostic;
use crate::docs::Category;
use crate::template::TemplateDocument;

/// Prefix shared by the ids of rules defined in this crate.
pub const RULE_PREFIX: &str = "vue-pug/";

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Whether this id belongs to a rule defined in this crate.
    pub fn is_own(&self) -> bool {
        self.0.starts_with(RULE_PREFIX)
    }

    /// The rule name without its plugin prefix.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that fails the lint run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Documentation metadata for a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleDocs {
    /// Preset categories that enable this rule.
    pub categories: Vec<Category>,
    /// Documentation page for the rule.
    pub url: Option<String>,
    /// Whether the rule replaces an upstream rule of the same name.
    pub drop_in: bool,
    /// Whether the rule extends a core rule to template expressions.
    pub extension_rule: bool,
    /// Whether the rule offers editor suggestions.
    pub has_suggestions: bool,
    /// Whether the rule is deprecated.
    pub deprecated: bool,
    /// Names of the rules that replace a deprecated rule.
    pub replaced_by: Vec<String>,
}

/// A lint rule that checks a template document.
///
/// Rules are constructed from configuration once per run and then applied
/// to every document independently.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Severity this rule reports with, after configuration.
    fn severity(&self) -> Severity {
        self.default_severity()
    }

    /// Documentation metadata.
    fn docs(&self) -> RuleDocs {
        RuleDocs::default()
    }

    /// Check the document and return any diagnostics.
    fn check(&self, document: &TemplateDocument) -> Vec<LintDiagnostic>;

    /// Whether this rule supports auto-fix.
    fn supports_fix(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_equality() {
        let id1 = RuleId::new("test-rule");
        let id2 = RuleId::new("test-rule");
        let id3 = RuleId::new("other-rule");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn rule_id_display() {
        let id = RuleId::new("vue-pug/my-rule");
        assert_eq!(format!("{}", id), "vue-pug/my-rule");
    }

    #[test]
    fn rule_id_ownership_and_name() {
        let own = RuleId::new("vue-pug/no-pug-control-flow");
        let upstream = RuleId::new("vue/html-indent");
        let bare = RuleId::new("no-console");

        assert!(own.is_own());
        assert!(!upstream.is_own());
        assert_eq!(own.name(), "no-pug-control-flow");
        assert_eq!(upstream.name(), "html-indent");
        assert_eq!(bare.name(), "no-console");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }
}
