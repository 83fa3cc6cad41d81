//! Command-line interface for vue-pug-lint.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, DocsArgs, LintArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
