//! Configuration file discovery and loading.
//!
//! The project config lives at `.vue-pug-lint.yml` (or `.yaml`) in the
//! project root. A config path given on the command line takes precedence
//! and must exist; a project without any config uses built-in defaults.

use crate::config::schema::LintConfig;
use crate::error::{PugLintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names searched in the project root, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".vue-pug-lint.yml", ".vue-pug-lint.yaml"];

/// Find the project config file in `project_root`.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Find the project root by walking up from `start`.
///
/// Looks for a config file first, then a `.git` directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if find_config(&current).is_some() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PugLintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PugLintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`LintConfig`].
///
/// An empty file is an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PugLintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the config for a run.
///
/// Uses `explicit` when given, otherwise the config discovered in
/// `project_root`, otherwise the defaults.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<LintConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!(
                    "No config found in {}, using defaults",
                    project_root.display()
                );
                return Ok(LintConfig::default());
            }
        },
    };

    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}
