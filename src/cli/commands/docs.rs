//! Docs command implementation.
//!
//! The `vue-pug-lint docs` command regenerates the rules index page.

use std::io::Write;

use anyhow::Context;

use crate::cli::args::DocsArgs;
use crate::docs::{load_catalog, RulesIndex};
use crate::error::Result;
use crate::lint::RuleRegistry;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The docs command implementation.
pub struct DocsCommand {
    context: CommandContext,
    args: DocsArgs,
}

impl DocsCommand {
    /// Create a new docs command.
    pub fn new(context: CommandContext, args: DocsArgs) -> Self {
        Self { context, args }
    }

    fn build_index(&self) -> Result<RulesIndex> {
        let upstream = match &self.args.upstream {
            Some(path) => load_catalog(&self.context.project_root.join(path))?,
            None => Vec::new(),
        };
        // Every built-in rule is documented, whatever the local config says.
        let registry = RuleRegistry::with_defaults()?;
        Ok(RulesIndex::from_registry(&registry, upstream))
    }
}

impl Command for DocsCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let index = self.build_index()?;

        if self.args.stdout {
            out.write_all(index.render().as_bytes())?;
            return Ok(CommandResult::success());
        }

        let path = self.context.project_root.join(&self.args.output);
        index
            .write_to(&path)
            .with_context(|| format!("Failed to write rules index to {}", path.display()))?;
        writeln!(
            out,
            "Wrote {} rule(s) to {}",
            index.entries().len(),
            path.display()
        )?;

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn context(root: &std::path::Path) -> CommandContext {
        CommandContext {
            project_root: root.to_path_buf(),
            config_path: None,
            use_color: false,
        }
    }

    #[test]
    fn writes_index_file() {
        let temp = TempDir::new().unwrap();
        let cmd = DocsCommand::new(context(temp.path()), DocsArgs::default());
        let mut out = Vec::new();

        let result = cmd.execute(&mut out).unwrap();

        assert!(result.success);
        let page = fs::read_to_string(temp.path().join("docs/rules/README.md")).unwrap();
        assert!(page.contains("vue-pug/no-pug-control-flow"));
        assert!(String::from_utf8(out).unwrap().contains("Wrote 1 rule(s)"));
    }

    #[test]
    fn prints_to_stdout() {
        let temp = TempDir::new().unwrap();
        let args = DocsArgs {
            stdout: true,
            ..DocsArgs::default()
        };
        let mut out = Vec::new();

        DocsCommand::new(context(temp.path()), args)
            .execute(&mut out)
            .unwrap();

        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("---\nsidebarDepth: 0"));
        assert!(!temp.path().join("docs").exists());
    }

    #[test]
    fn includes_upstream_catalog() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("upstream.yml"),
            "- rule_id: vue/html-indent\n  status: todo\n",
        )
        .unwrap();
        let args = DocsArgs {
            upstream: Some(PathBuf::from("upstream.yml")),
            stdout: true,
            ..DocsArgs::default()
        };
        let mut out = Vec::new();

        DocsCommand::new(context(temp.path()), args)
            .execute(&mut out)
            .unwrap();

        assert!(String::from_utf8(out)
            .unwrap()
            .contains("| 🚧 | [vue/html-indent]"));
    }
}
