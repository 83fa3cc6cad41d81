//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub code scanning and VS Code.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, RuleRegistry, Severity};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// Formats lint output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    /// Known rule descriptions and help links, keyed by rule id.
    rules: BTreeMap<String, RuleDescriptor>,
}

#[derive(Debug, Clone)]
struct RuleDescriptor {
    description: String,
    help_uri: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    help_uri: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
    start_column: usize,
    end_line: usize,
    end_column: usize,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            rules: BTreeMap::new(),
        }
    }

    /// Describe the rules of `registry` in the tool driver.
    pub fn with_rules(mut self, registry: &RuleRegistry) -> Self {
        for rule in registry.iter() {
            self.rules.insert(
                rule.id().0,
                RuleDescriptor {
                    description: rule.description().to_string(),
                    help_uri: rule.docs().url,
                },
            );
        }
        self
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn driver_rules(&self, diagnostics: &[LintDiagnostic]) -> Vec<SarifRule> {
        let mut rules: BTreeMap<String, SarifRule> = self
            .rules
            .iter()
            .map(|(id, descriptor)| {
                (
                    id.clone(),
                    SarifRule {
                        id: id.clone(),
                        short_description: SarifMessage {
                            text: descriptor.description.clone(),
                        },
                        help_uri: descriptor.help_uri.clone(),
                    },
                )
            })
            .collect();

        for diagnostic in diagnostics {
            let id = &diagnostic.rule_id.0;
            rules.entry(id.clone()).or_insert_with(|| SarifRule {
                id: id.clone(),
                short_description: SarifMessage {
                    text: format!("Rule {}", id),
                },
                help_uri: None,
            });
        }

        rules.into_values().collect()
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let results: Vec<_> = diagnostics
            .iter()
            .map(|d| {
                let locations = d
                    .span
                    .as_ref()
                    .map(|span| {
                        vec![SarifLocation {
                            physical_location: SarifPhysicalLocation {
                                artifact_location: SarifArtifactLocation {
                                    uri: span.file.display().to_string(),
                                },
                                region: SarifRegion {
                                    start_line: span.start_line,
                                    start_column: span.start_col,
                                    end_line: span.end_line,
                                    end_column: span.end_col,
                                },
                            },
                        }]
                    })
                    .unwrap_or_default();

                SarifResult {
                    rule_id: d.rule_id.0.clone(),
                    level: Self::severity_to_level(d.severity),
                    message: SarifMessage {
                        text: d.message.clone(),
                    },
                    locations,
                }
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules: self.driver_rules(diagnostics),
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(writer, &log).map_err(std::io::Error::other)?;

        Ok(())
    }
}
