//! Lint command implementation.
//!
//! The `vue-pug-lint lint` command checks parsed template token files
//! against the configured rules.

use std::io::Write;

use crate::cli::args::LintArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::lint::{
    collect_diagnostics, should_fail, HumanFormatter, JsonFormatter, LintDiagnostic,
    LintFormatter, Linter, OutputFormat, RuleRegistry, SarifFormatter,
};
use crate::template::TemplateDocument;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    context: CommandContext,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(context: CommandContext, args: LintArgs) -> Self {
        Self { context, args }
    }

    fn load_documents(&self) -> Result<Vec<TemplateDocument>> {
        self.args
            .files
            .iter()
            .map(|path| TemplateDocument::load(path))
            .collect()
    }

    fn format_output(
        &self,
        registry: &RuleRegistry,
        diagnostics: &[LintDiagnostic],
        out: &mut dyn Write,
    ) -> Result<()> {
        let mut out = out;
        match self.args.format {
            OutputFormat::Human => {
                HumanFormatter::new(self.context.use_color).format(diagnostics, &mut out)?
            }
            OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut out)?,
            OutputFormat::Sarif => {
                SarifFormatter::new("vue-pug-lint", env!("CARGO_PKG_VERSION"))
                    .with_rules(registry)
                    .format(diagnostics, &mut out)?
            }
        }
        Ok(())
    }
}

impl Command for LintCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config(
            &self.context.project_root,
            self.context.config_path.as_deref(),
        )?;
        let registry = RuleRegistry::with_builtins(&config)?;
        if registry.is_empty() {
            tracing::warn!("All rules are disabled; nothing will be reported");
        }

        let documents = self.load_documents()?;
        let linter = Linter::new(registry);
        let reports = linter.lint_documents(&documents);
        let diagnostics = collect_diagnostics(&reports);

        tracing::debug!(
            "Checked {} document(s), {} diagnostic(s)",
            documents.len(),
            diagnostics.len()
        );

        if diagnostics.is_empty() && self.args.format == OutputFormat::Human {
            writeln!(out, "No problems found in {} file(s)", documents.len())?;
        } else {
            self.format_output(linter.registry(), &diagnostics, out)?;
        }

        if should_fail(&diagnostics, self.args.strict) {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
