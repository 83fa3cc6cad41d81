//! JSON Schema generation for the vue-pug-lint config file.
//!
//! This module generates a JSON Schema (Draft-07) for `.vue-pug-lint.yml`,
//! enabling IDE autocomplete and validation. Rule option schemas come from
//! the rules' own option types.

use serde_json::{json, Map, Value};

use super::rules::NoPugControlFlowRule;

/// Generates JSON Schema for the config file.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for the config file.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "$id": "https://eslint-plugin-vue-pug.rash.codes/schemas/config.json",
            "title": "vue-pug-lint Configuration",
            "description": "Rule configuration for linting Pug templates in Vue files",
            "type": "object",
            "properties": {
                "rules": self.rules_schema()
            },
            "additionalProperties": false
        })
    }

    fn rules_schema(&self) -> Value {
        let mut properties = Map::new();
        properties.insert(
            NoPugControlFlowRule::ID.to_string(),
            self.rule_schema(NoPugControlFlowRule::options_schema()),
        );

        json!({
            "type": "object",
            "description": "Per-rule settings keyed by rule id",
            "properties": properties,
            "additionalProperties": false
        })
    }

    /// A rule entry: a bare level or `{ level, options }`.
    fn rule_schema(&self, mut options: Value) -> Value {
        // Nested schemas must not redeclare the dialect.
        if let Some(object) = options.as_object_mut() {
            object.remove("$schema");
        }

        json!({
            "oneOf": [
                self.level_schema(),
                {
                    "type": "object",
                    "properties": {
                        "level": self.level_schema(),
                        "options": options
                    },
                    "additionalProperties": false
                }
            ]
        })
    }

    fn level_schema(&self) -> Value {
        json!({
            "type": "string",
            "enum": ["off", "warn", "warning", "error"],
            "description": "Reporting level"
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
