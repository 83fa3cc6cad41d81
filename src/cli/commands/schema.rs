//! Schema command implementation.
//!
//! The `vue-pug-lint schema` command prints the config file's JSON Schema.

use std::io::Write;

use crate::error::Result;
use crate::lint::SchemaGenerator;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        serde_json::to_writer_pretty(&mut *out, &schema).map_err(std::io::Error::other)?;
        writeln!(out)?;
        Ok(CommandResult::success())
    }
}
