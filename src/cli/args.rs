//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// vue-pug-lint - Lint rules for Pug templates in Vue files.
#[derive(Debug, Parser)]
#[command(name = "vue-pug-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .vue-pug-lint.yml discovery)
    #[arg(short, long, global = true, env = "VUE_PUG_LINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint parsed template token files
    Lint(LintArgs),

    /// Generate the rules index page
    Docs(DocsArgs),

    /// Print the JSON Schema of the config file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Token dump files produced by the template parser (JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `docs` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DocsArgs {
    /// Output path, relative to the project root
    #[arg(short, long, default_value = "docs/rules/README.md")]
    pub output: PathBuf,

    /// YAML catalog of upstream rules to list alongside the built-in rules
    #[arg(long)]
    pub upstream: Option<PathBuf>,

    /// Print the page instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl Default for DocsArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from("docs/rules/README.md"),
            upstream: None,
            stdout: false,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
