//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations with a shared [`CommandContext`].

pub mod completions;
pub mod dispatcher;
pub mod docs;
pub mod lint;
pub mod schema;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
