//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores the configured lint rules and provides
//! methods for registering, retrieving, and iterating over them. Rules are
//! kept in id order so output is deterministic.

use std::collections::BTreeMap;

use super::rule::{LintRule, RuleId};
use super::rules::NoPugControlFlowRule;
use crate::config::LintConfig;
use crate::error::{PugLintError, Result};

/// Ids of every built-in rule.
pub const BUILTIN_RULES: [&str; 1] = [NoPugControlFlowRule::ID];

/// Registry of configured lint rules.
pub struct RuleRegistry {
    rules: BTreeMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules at their defaults.
    pub fn with_defaults() -> Result<Self> {
        Self::with_builtins(&LintConfig::default())
    }

    /// Create a registry with all built-in rules, configured from `config`.
    ///
    /// Rules set to `off` are left out. Settings for unknown rule ids and
    /// invalid rule options are errors.
    pub fn with_builtins(config: &LintConfig) -> Result<Self> {
        if let Some(unknown) = config
            .rules
            .keys()
            .find(|id| !BUILTIN_RULES.contains(&id.as_str()))
        {
            return Err(PugLintError::UnknownRule {
                id: unknown.clone(),
            });
        }

        let mut registry = Self::new();

        let setting = config.rule(NoPugControlFlowRule::ID);
        let level = setting.and_then(|s| s.level());
        let mut rule = NoPugControlFlowRule::from_value(setting.and_then(|s| s.options()))?;
        match level.map(|l| l.severity()) {
            Some(None) => {
                tracing::debug!("Rule '{}' is off", NoPugControlFlowRule::ID);
            }
            Some(Some(severity)) => {
                rule = rule.with_severity(severity);
                registry.register(Box::new(rule));
            }
            None => registry.register(Box::new(rule)),
        }

        tracing::debug!("Registered {} rule(s)", registry.len());
        Ok(registry)
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Iterate over all rules in id order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::lint::{LintDiagnostic, Severity};
    use crate::template::TemplateDocument;
    use std::path::Path;

    struct MockRule {
        id: RuleId,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check(&self, _document: &TemplateDocument) -> Vec<LintDiagnostic> {
            vec![]
        }
    }

    fn severity_of(registry: &RuleRegistry, id: &str) -> Option<Severity> {
        registry
            .iter()
            .find(|rule| rule.id().0 == id)
            .map(|rule| rule.severity())
    }

    fn config(yaml: &str) -> LintConfig {
        parse_config(yaml, Path::new(".vue-pug-lint.yml")).unwrap()
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("mock"),
        }));

        assert_eq!(registry.len(), 1);
        assert_eq!(severity_of(&registry, "mock"), Some(Severity::Warning));
        assert_eq!(severity_of(&registry, "unknown"), None);
    }

    #[test]
    fn registry_iterates_in_id_order() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule2"),
        }));
        registry.register(Box::new(MockRule {
            id: RuleId::new("rule1"),
        }));

        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec!["rule1", "rule2"]);
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = RuleRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn defaults_register_every_builtin() {
        let registry = RuleRegistry::with_defaults().unwrap();

        assert_eq!(registry.len(), BUILTIN_RULES.len());
        assert_eq!(
            severity_of(&registry, NoPugControlFlowRule::ID),
            Some(Severity::Error)
        );
    }

    #[test]
    fn off_rules_are_not_registered() {
        let registry =
            RuleRegistry::with_builtins(&config("rules:\n  vue-pug/no-pug-control-flow: off\n"))
                .unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn level_sets_severity() {
        let registry = RuleRegistry::with_builtins(&config(
            "rules:\n  vue-pug/no-pug-control-flow:\n    level: warn\n",
        ))
        .unwrap();

        assert_eq!(
            severity_of(&registry, NoPugControlFlowRule::ID),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn unknown_rule_is_an_error() {
        let err = RuleRegistry::with_builtins(&config("rules:\n  vue/html-indent: error\n"))
            .err()
            .unwrap();
        assert!(matches!(err, PugLintError::UnknownRule { id } if id == "vue/html-indent"));
    }

    #[test]
    fn invalid_options_are_an_error_even_when_off() {
        let yaml = r#"
rules:
  vue-pug/no-pug-control-flow:
    level: off
    options:
      ignores: [bogus]
"#;
        let err = RuleRegistry::with_builtins(&config(yaml)).err().unwrap();
        assert!(matches!(err, PugLintError::UnknownIgnore { .. }));
    }
}
