//! Template linting.
//!
//! This module checks parsed Pug templates through a pluggable rule-based
//! system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - The configured rules for a run ([`RuleRegistry`])
//! - **Linter** - Applies the registry to documents ([`Linter`])
//! - **Diagnostics** - Reported violations with severity and location ([`LintDiagnostic`])
//!
//! # Example
//!
//! ```
//! use vue_pug_lint::lint::{Linter, RuleRegistry};
//! use vue_pug_lint::template::{SourceLocation, TemplateDocument, Token};
//!
//! let linter = Linter::new(RuleRegistry::with_defaults().unwrap());
//! let document = TemplateDocument::from_tokens(
//!     "App.vue",
//!     vec![Token::new("PugIf", SourceLocation::new((2, 4), (2, 6)))],
//! );
//!
//! let report = linter.lint_document(&document);
//! assert_eq!(report.diagnostics[0].message, "Using pug if statements is forbidden.");
//! ```

pub mod diagnostic;
pub mod engine;
pub mod ignores;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod schema;
pub mod span;

pub use diagnostic::LintDiagnostic;
pub use engine::{collect_diagnostics, should_fail, DocumentReport, Linter};
pub use ignores::{normalize_ignores, IgnoreSet};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter};
pub use registry::{RuleRegistry, BUILTIN_RULES};
pub use rule::{LintRule, RuleDocs, RuleId, Severity, RULE_PREFIX};
pub use rules::{NoPugControlFlowOptions, NoPugControlFlowRule};
pub use schema::SchemaGenerator;
pub use span::Span;
