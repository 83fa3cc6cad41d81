//! Error types for vue-pug-lint operations.
//!
//! This module defines [`PugLintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PugLintError` for configuration and input errors that need distinct handling
//! - Use `anyhow::Error` (via `PugLintError::Other`) for unexpected errors
//! - Lint findings are never errors; they are reported as diagnostics

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vue-pug-lint operations.
#[derive(Debug, Error)]
pub enum PugLintError {
    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Rule options did not match the rule's option schema.
    #[error("Invalid options for rule '{rule}': {message}")]
    InvalidRuleOptions { rule: String, message: String },

    /// An `ignores` entry names no known Pug construct.
    #[error("Unknown ignore entry '{entry}' for rule '{rule}' (expected one of: {expected})")]
    UnknownIgnore {
        rule: String,
        entry: String,
        expected: String,
    },

    /// An `ignores` entry appears more than once.
    #[error("Duplicate ignore entry '{entry}' for rule '{rule}'")]
    DuplicateIgnore { rule: String, entry: String },

    /// Configuration refers to a rule that does not exist.
    #[error("Unknown rule: {id}")]
    UnknownRule { id: String },

    /// Failed to parse a template token dump.
    #[error("Failed to parse template tokens at {path}: {message}")]
    DocumentParseError { path: PathBuf, message: String },

    /// An input file could not be read.
    #[error("Failed to read {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse an upstream rule catalog.
    #[error("Failed to parse rule catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PugLintError {
    /// Whether this error comes from user configuration rather than input files or IO.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PugLintError::ConfigNotFound { .. }
                | PugLintError::ConfigParseError { .. }
                | PugLintError::InvalidRuleOptions { .. }
                | PugLintError::UnknownIgnore { .. }
                | PugLintError::DuplicateIgnore { .. }
                | PugLintError::UnknownRule { .. }
        )
    }
}

/// Result type alias for vue-pug-lint operations.
pub type Result<T> = std::result::Result<T, PugLintError>;
