//! Pug control-flow detection.
//!
//! This rule reports Pug constructs that bypass Vue's own template
//! semantics: conditionals, loops, includes, mixins and inline code.
//! Individual constructs can be allowed through the `ignores` option.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::docs::Category;
use crate::error::{PugLintError, Result};
use crate::lint::ignores::IgnoreSet;
use crate::lint::{LintDiagnostic, LintRule, RuleDocs, RuleId, Severity, Span};
use crate::template::{PugTokenKind, TemplateDocument, Token};

/// Options accepted by [`NoPugControlFlowRule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NoPugControlFlowOptions {
    /// Short names of constructs to allow, e.g. `if` or `each`.
    #[serde(default)]
    #[schemars(extend("uniqueItems" = true))]
    pub ignores: Vec<String>,
}

/// Forbids Pug control-flow and templating constructs.
#[derive(Debug, Clone)]
pub struct NoPugControlFlowRule {
    severity: Severity,
    ignores: IgnoreSet,
}

impl NoPugControlFlowRule {
    /// Rule identifier.
    pub const ID: &'static str = "vue-pug/no-pug-control-flow";

    /// Create the rule with an already resolved ignore set.
    pub fn new(ignores: IgnoreSet) -> Self {
        Self {
            severity: Severity::Error,
            ignores,
        }
    }

    /// Override the reporting severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Build the rule from typed options, validating `ignores`.
    pub fn from_options(options: &NoPugControlFlowOptions) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &options.ignores {
            if !seen.insert(entry.as_str()) {
                return Err(PugLintError::DuplicateIgnore {
                    rule: Self::ID.to_string(),
                    entry: entry.clone(),
                });
            }
        }

        let ignores = IgnoreSet::resolve(Self::ID, &options.ignores)?;
        Ok(Self::new(ignores))
    }

    /// Build the rule from raw configuration options.
    pub fn from_value(options: Option<&serde_json::Value>) -> Result<Self> {
        let options = match options {
            Some(value) => NoPugControlFlowOptions::deserialize(value).map_err(|e| {
                PugLintError::InvalidRuleOptions {
                    rule: Self::ID.to_string(),
                    message: e.to_string(),
                }
            })?,
            None => NoPugControlFlowOptions::default(),
        };
        Self::from_options(&options)
    }

    /// JSON Schema for the rule's options.
    pub fn options_schema() -> serde_json::Value {
        schemars::schema_for!(NoPugControlFlowOptions).to_value()
    }

    /// The kinds this rule does not report.
    pub fn ignores(&self) -> &IgnoreSet {
        &self.ignores
    }

    /// Tokens that are forbidden under the current ignores, in input order.
    pub fn illegal_tokens<'a>(
        &'a self,
        tokens: &'a [Token],
    ) -> impl Iterator<Item = (&'a Token, PugTokenKind)> + 'a {
        tokens.iter().filter_map(move |token| {
            token
                .pug_kind()
                .filter(|kind| !self.ignores.contains(*kind))
                .map(|kind| (token, kind))
        })
    }

    /// Message reported for a forbidden construct.
    pub fn message(kind: PugTokenKind) -> String {
        format!("Using pug {} is forbidden.", kind.description())
    }
}

impl Default for NoPugControlFlowRule {
    fn default() -> Self {
        Self::new(IgnoreSet::new())
    }
}

impl LintRule for NoPugControlFlowRule {
    fn id(&self) -> RuleId {
        RuleId::new(Self::ID)
    }

    fn name(&self) -> &str {
        "No Pug Control Flow"
    }

    fn description(&self) -> &str {
        "disallow pug control flow features."
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn docs(&self) -> RuleDocs {
        RuleDocs {
            categories: vec![Category::Vue3StronglyRecommended, Category::StronglyRecommended],
            url: Some(
                "https://eslint-plugin-vue-pug.rash.codes/rules/no-pug-control-flow.html"
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    fn check(&self, document: &TemplateDocument) -> Vec<LintDiagnostic> {
        let Some(tokens) = document.tokens() else {
            return Vec::new();
        };

        self.illegal_tokens(tokens)
            .map(|(token, kind)| {
                LintDiagnostic::new(self.id(), self.severity, Self::message(kind))
                    .with_span(Span::from_location(&document.path, &token.loc))
            })
            .collect()
    }
}
