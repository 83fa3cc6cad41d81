//! Configuration schema types.
//!
//! The config file maps rule ids to either a bare level or a level plus
//! rule-specific options:
//!
//! ```yaml
//! rules:
//!   vue-pug/no-pug-control-flow:
//!     level: warn
//!     options:
//!       ignores: [each]
//! ```
//!
//! Options stay untyped here; each rule validates its own options when it is
//! constructed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lint::Severity;

/// How a configured rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Rule is disabled.
    Off,
    /// Rule reports warnings.
    #[serde(alias = "warning")]
    Warn,
    /// Rule reports errors.
    Error,
}

impl RuleLevel {
    /// Severity for this level, or `None` when the rule is disabled.
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Warn => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

/// Full configuration for a single rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Reporting level; the rule's default severity when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<RuleLevel>,

    /// Rule-specific options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// A rule entry: either a bare level or a full [`RuleConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Level(RuleLevel),
    Detailed(RuleConfig),
}

impl RuleSetting {
    /// The configured level, if any.
    pub fn level(&self) -> Option<RuleLevel> {
        match self {
            RuleSetting::Level(level) => Some(*level),
            RuleSetting::Detailed(config) => config.level,
        }
    }

    /// The configured options, if any.
    pub fn options(&self) -> Option<&serde_json::Value> {
        match self {
            RuleSetting::Level(_) => None,
            RuleSetting::Detailed(config) => config.options.as_ref(),
        }
    }
}

/// Root of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Per-rule settings keyed by rule id.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
}

impl LintConfig {
    /// Setting for a rule id, if configured.
    pub fn rule(&self, id: &str) -> Option<&RuleSetting> {
        self.rules.get(id)
    }
}
