//! Configuration loading and parsing.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use vue_pug_lint::config::{parse_config, RuleLevel};
//! use std::path::Path;
//!
//! let yaml = "rules:\n  vue-pug/no-pug-control-flow: warn\n";
//! let config = parse_config(yaml, Path::new(".vue-pug-lint.yml")).unwrap();
//! let setting = config.rule("vue-pug/no-pug-control-flow").unwrap();
//! assert_eq!(setting.level(), Some(RuleLevel::Warn));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_config, find_project_root, load_config, load_config_file, parse_config,
    CONFIG_FILE_NAMES,
};
pub use schema::{LintConfig, RuleConfig, RuleLevel, RuleSetting};
