//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TOKENS: &str = r#"{
  "type": "Program",
  "templateBody": {
    "type": "VElement",
    "tokens": [
      {"type": "PugTag", "value": "div", "loc": {"start": {"line": 2, "column": 0}, "end": {"line": 2, "column": 3}}},
      {"type": "PugIf", "value": "ok", "loc": {"start": {"line": 3, "column": 2}, "end": {"line": 3, "column": 7}}},
      {"type": "PugEach", "value": "item in items", "loc": {"start": {"line": 4, "column": 4}, "end": {"line": 4, "column": 22}}},
      {"type": "PugCall", "value": "card", "loc": {"start": {"line": 5, "column": 6}, "end": {"line": 5, "column": 11}}}
    ]
  }
}"#;

fn setup_project(config: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("App.json"), TOKENS).unwrap();
    fs::write(temp.path().join("Empty.json"), r#"{"type": "Program"}"#).unwrap();
    if let Some(config) = config {
        fs::write(temp.path().join(".vue-pug-lint.yml"), config).unwrap();
    }
    temp
}

fn cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("vue-pug-lint"));
    cmd.current_dir(temp.path())
        .arg("--project")
        .arg(temp.path())
        .env_remove("VUE_PUG_LINT_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("vue-pug-lint"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Lint rules for Pug templates"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("vue-pug-lint"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn lint_reports_control_flow() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cmd(&temp)
        .args(["lint", "App.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "error[vue-pug/no-pug-control-flow]: Using pug if statements is forbidden.",
        ))
        .stdout(predicate::str::contains("App.json:3:3"))
        .stdout(predicate::str::contains("Using pug each loops is forbidden."))
        .stdout(predicate::str::contains("Using pug mixin calls is forbidden."))
        .stdout(predicate::str::contains("Found 3 error(s) and 0 warning(s)"));
    Ok(())
}

#[test]
fn lint_honors_ignores() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(
        "rules:\n  vue-pug/no-pug-control-flow:\n    options:\n      ignores: [Each, CALL]\n",
    ));
    cmd(&temp)
        .args(["lint", "App.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("if statements"))
        .stdout(predicate::str::contains("each loops").not())
        .stdout(predicate::str::contains("mixin calls").not());
    Ok(())
}

#[test]
fn lint_without_template_body_is_clean() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cmd(&temp)
        .args(["lint", "Empty.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found in 1 file(s)"));
    Ok(())
}

#[test]
fn lint_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    let output = cmd(&temp)
        .args(["lint", "App.json", "Empty.json", "--format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["summary"]["total"], 3);
    assert_eq!(parsed["diagnostics"][1]["line"], 4);
    assert_eq!(parsed["diagnostics"][1]["column"], 5);
    Ok(())
}

#[test]
fn lint_warn_level_passes_unless_strict() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some("rules:\n  vue-pug/no-pug-control-flow: warn\n"));
    cmd(&temp)
        .args(["lint", "App.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning[vue-pug/no-pug-control-flow]"));

    cmd(&temp)
        .args(["lint", "App.json", "--strict"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn lint_rejects_unknown_ignore() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some(
        "rules:\n  vue-pug/no-pug-control-flow:\n    options:\n      ignores: [bogus]\n",
    ));
    cmd(&temp)
        .args(["lint", "App.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown ignore entry 'bogus'"));
    Ok(())
}

#[test]
fn lint_rejects_unknown_rule() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(Some("rules:\n  vue-pug/no-such-rule: error\n"));
    cmd(&temp)
        .args(["lint", "App.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule: vue-pug/no-such-rule"))
        .stderr(predicate::str::contains("vue-pug-lint schema"));
    Ok(())
}

#[test]
fn lint_reports_malformed_tokens() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    fs::write(temp.path().join("Broken.json"), "{\"templateBody\": [")?;
    cmd(&temp)
        .args(["lint", "Broken.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Broken.json"));
    Ok(())
}

#[test]
fn explicit_config_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    fs::write(
        temp.path().join("custom.yml"),
        "rules:\n  vue-pug/no-pug-control-flow: off\n",
    )?;
    cmd(&temp)
        .args(["lint", "App.json", "--config", "custom.yml"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn docs_writes_rules_index() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cmd(&temp).arg("docs").assert().success();

    let page = fs::read_to_string(temp.path().join("docs/rules/README.md"))?;
    assert!(page.contains("# Available rules"));
    assert!(page.contains("[vue-pug/no-pug-control-flow](./no-pug-control-flow.md)"));
    Ok(())
}

#[test]
fn schema_prints_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    let output = cmd(&temp).arg("schema").output()?;

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(parsed["properties"]["rules"].is_object());
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cmd(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vue-pug-lint"));
    Ok(())
}

#[test]
fn lint_names_missing_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    cmd(&temp)
        .args(["lint", "App.json", "Gone.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read Gone.json"))
        .stderr(predicate::str::contains("vue-pug-lint schema").not());
    Ok(())
}

#[test]
fn docs_rejects_malformed_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(None);
    fs::write(temp.path().join("upstream.yml"), "- rule_id: [unclosed\n")?;
    cmd(&temp)
        .args(["docs", "--stdout", "--upstream"])
        .arg(temp.path().join("upstream.yml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse rule catalog"))
        .stderr(predicate::str::contains("vue-pug-lint schema").not());
    Ok(())
}
