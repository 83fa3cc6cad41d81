//! Generator for the rules index page (`docs/rules/README.md`).
//!
//! The index lists this crate's rules next to the upstream Vue rules,
//! grouped by preset category, with marks for how each upstream rule
//! behaves on Pug templates.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::{PugLintError, Result};
use crate::lint::{LintRule, RuleId, RuleRegistry};

/// Base URL of upstream rule documentation.
pub const UPSTREAM_BASE: &str = "https://eslint.vuejs.org/rules/";

const TABLE_HEADER: &str = "|    | Rule ID | Description |    |\n|:---|:--------|:------------|:---|\n";

/// How an upstream rule behaves on Pug templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamStatus {
    /// Works out of the box.
    #[default]
    Works,
    /// Does not affect templates.
    Ignored,
    /// Pug support still to be done.
    Todo,
}

/// Documentation metadata for one rule in the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDocEntry {
    /// Full rule id, e.g. `vue-pug/no-pug-control-flow` or `vue/html-indent`.
    pub rule_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: UpstreamStatus,
    #[serde(default)]
    pub drop_in: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub extension_rule: bool,
    #[serde(default)]
    pub fixable: bool,
    #[serde(default)]
    pub has_suggestions: bool,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub replaced_by: Vec<String>,
}

impl RuleDocEntry {
    /// Describe a rule defined in this crate.
    pub fn from_rule(rule: &dyn LintRule) -> Self {
        let docs = rule.docs();
        Self {
            rule_id: rule.id().0,
            description: Some(rule.description().to_string()),
            status: UpstreamStatus::Works,
            drop_in: docs.drop_in,
            categories: docs.categories,
            extension_rule: docs.extension_rule,
            fixable: rule.supports_fix(),
            has_suggestions: docs.has_suggestions,
            deprecated: docs.deprecated,
            replaced_by: docs.replaced_by,
        }
    }

    fn id(&self) -> RuleId {
        RuleId::new(self.rule_id.clone())
    }

    fn name(&self) -> String {
        self.id().name().to_string()
    }

    fn is_own(&self) -> bool {
        self.id().is_own()
    }

    fn pug_mark(&self) -> &'static str {
        if self.is_own() {
            if self.drop_in {
                "🤝"
            } else {
                "🐶"
            }
        } else {
            match self.status {
                UpstreamStatus::Ignored => "💤",
                UpstreamStatus::Todo => "🚧",
                UpstreamStatus::Works => "🎁",
            }
        }
    }

    fn marks(&self) -> String {
        let mut marks = String::new();
        if self.fixable {
            marks.push_str(":wrench:");
        }
        if self.has_suggestions {
            marks.push_str(":bulb:");
        }
        if self.deprecated {
            marks.push_str(":warning:");
        }
        marks
    }

    fn link(&self) -> String {
        let name = self.name();
        if self.is_own() {
            format!("[{}](./{}.md)", self.rule_id, name)
        } else {
            format!("[{}]({}{}.html)", self.rule_id, UPSTREAM_BASE, name)
        }
    }

    fn row(&self) -> String {
        format!(
            "| {} | {} | {} | {} |",
            self.pug_mark(),
            self.link(),
            self.description.as_deref().unwrap_or("(no description)"),
            self.marks()
        )
    }

    fn deprecated_row(&self) -> String {
        let replaced_by = self
            .replaced_by
            .iter()
            .map(|name| format!("[vue/{}](./{}.md)", name, name))
            .collect::<Vec<_>>()
            .join(", ");
        let replaced_by = if replaced_by.is_empty() {
            "(no replacement)".to_string()
        } else {
            replaced_by
        };

        format!("| [{}](./{}.md) | {} |", self.rule_id, self.name(), replaced_by)
    }
}

/// Load a YAML list of upstream rule entries.
pub fn load_catalog(path: &Path) -> Result<Vec<RuleDocEntry>> {
    let content = fs::read_to_string(path).map_err(|e| PugLintError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| PugLintError::CatalogParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The rules index page.
pub struct RulesIndex {
    entries: Vec<RuleDocEntry>,
}

impl RulesIndex {
    /// Build an index from entries; rows are ordered by rule id.
    pub fn new(mut entries: Vec<RuleDocEntry>) -> Self {
        entries.sort_by(|a, b| a.rule_id.cmp(&b.rule_id));
        Self { entries }
    }

    /// Index of the registry's rules plus `upstream` entries.
    pub fn from_registry(registry: &RuleRegistry, upstream: Vec<RuleDocEntry>) -> Self {
        let mut entries: Vec<_> = registry.iter().map(RuleDocEntry::from_rule).collect();
        entries.extend(upstream);
        Self::new(entries)
    }

    pub fn entries(&self) -> &[RuleDocEntry] {
        &self.entries
    }

    fn table(rows: &[&RuleDocEntry]) -> String {
        let rows: Vec<_> = rows.iter().map(|entry| entry.row()).collect();
        format!("{}{}\n", TABLE_HEADER, rows.join("\n"))
    }

    fn category_sections(&self) -> String {
        let mut content = String::new();

        for category in Category::ALL {
            let rules: Vec<_> = self
                .entries
                .iter()
                .filter(|e| !e.deprecated && e.categories.contains(&category))
                .collect();
            if rules.is_empty() {
                continue;
            }

            content.push_str(&format!(
                "\n## {}\n\nEnforce all the rules in this category, as well as all higher priority rules, with:\n\n```json\n{{\n  \"extends\": \"plugin:vue/{}\"\n}}\n```\n\n",
                category.title(),
                category.id()
            ));
            content.push_str(&Self::table(&rules));
        }

        content
    }

    fn uncategorized_section(&self) -> String {
        let uncategorized = |extension: bool| -> Vec<&RuleDocEntry> {
            self.entries
                .iter()
                .filter(|e| e.categories.is_empty() && e.extension_rule == extension && !e.deprecated)
                .collect()
        };
        let rules = uncategorized(false);
        let extension_rules = uncategorized(true);

        let Some(example) = rules.first().or(extension_rules.first()) else {
            return String::new();
        };

        let mut content = format!(
            "\n## Uncategorized\n\nNo preset enables the rules in this category.\nPlease enable each rule if you want.\n\nFor example:\n\n```json\n{{\n  \"rules\": {{\n    \"{}\": \"error\"\n  }}\n}}\n```\n",
            example.rule_id
        );

        if !rules.is_empty() {
            content.push('\n');
            content.push_str(&Self::table(&rules));
        }

        if !extension_rules.is_empty() {
            content.push_str(
                "\n### Extension Rules\n\nThe following rules extend the rules provided by ESLint itself and apply them to the expressions in the `<template>`.\n\n",
            );
            content.push_str(&Self::table(&extension_rules));
        }

        content
    }

    fn deprecated_section(&self) -> String {
        let rows: Vec<_> = self
            .entries
            .iter()
            .filter(|e| e.deprecated)
            .map(|e| e.deprecated_row())
            .collect();
        if rows.is_empty() {
            return String::new();
        }

        format!(
            "\n## Deprecated\n\n- :warning: We're going to remove deprecated rules in the next major release. Please migrate to successor/new rules.\n- :innocent: We don't fix bugs which are in deprecated rules since we don't have enough resources.\n\n| Rule ID | Replaced by |\n|:--------|:------------|\n{}\n",
            rows.join("\n")
        )
    }

    /// The rule tables, without the page header.
    pub fn render_tables(&self) -> String {
        let mut content = self.category_sections();
        content.push_str(&self.uncategorized_section());
        content.push_str(&self.deprecated_section());
        content
    }

    /// The full page.
    pub fn render(&self) -> String {
        format!(
            r#"---
sidebarDepth: 0
---

# Available rules

<!-- This file is automatically generated by `vue-pug-lint docs`, do not change! -->

::: tip Legend
  🎁 upstream rule works out of the box
  🤝 `vue-pug/*` drop-in rule available
  💤 does not affect templates
  🚧 TODO
  🐶 new rule specific to pug

  :wrench: Indicates that the rule is fixable, and using `--fix` option on the [command line](https://eslint.org/docs/user-guide/command-line-interface#fixing-problems) can automatically fix some of the reported problems.

  :bulb: Indicates that some problems reported by the rule are manually fixable by editor [suggestions](https://eslint.org/docs/developer-guide/working-with-rules#providing-suggestions).
:::

{}"#,
            self.render_tables()
        )
    }

    /// Render and write the page, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render())?;
        tracing::debug!("Wrote rules index to {}", path.display());
        Ok(())
    }
}
