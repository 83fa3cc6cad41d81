//! vue-pug-lint - Lint rules for Pug templates in Vue single-file components.
//!
//! The crate consumes the token stream a template parser produces for a
//! `<template lang="pug">` block and reports constructs that projects want
//! to keep out of their templates.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and parsing
//! - [`docs`] - Rules index generation
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, registry, linter and output formatters
//! - [`template`] - Template tokens and documents
//!
//! # Example
//!
//! ```
//! use vue_pug_lint::lint::{IgnoreSet, LintRule, NoPugControlFlowRule};
//! use vue_pug_lint::template::{SourceLocation, TemplateDocument, Token};
//!
//! let ignores = IgnoreSet::resolve(NoPugControlFlowRule::ID, &["each"]).unwrap();
//! let rule = NoPugControlFlowRule::new(ignores);
//!
//! let document = TemplateDocument::from_tokens(
//!     "App.vue",
//!     vec![
//!         Token::new("PugIf", SourceLocation::new((1, 0), (1, 2))),
//!         Token::new("PugEach", SourceLocation::new((2, 0), (2, 4))),
//!         Token::new("Text", SourceLocation::new((3, 0), (3, 5))),
//!     ],
//! );
//!
//! let diagnostics = rule.check(&document);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "Using pug if statements is forbidden.");
//! ```

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod lint;
pub mod template;

pub use error::{PugLintError, Result};
