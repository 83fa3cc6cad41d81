//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use console::Style;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn severity_style(&self, severity: Severity) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match severity {
            Severity::Warning => Style::new().color256(208).bold(),
            Severity::Error => Style::new().red().bold(),
        }
    }

    fn dim(&self) -> Style {
        if self.use_color {
            Style::new().dim()
        } else {
            Style::new()
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        // `force_styling` keeps colors when writing into a buffer instead of a TTY.
        let dim = self.dim().force_styling(self.use_color);

        for diag in diagnostics {
            // Header line: error[rule-id]: message
            let style = self.severity_style(diag.severity).force_styling(self.use_color);
            writeln!(
                writer,
                "{}: {}",
                style.apply_to(format!(
                    "{}[{}]",
                    self.severity_prefix(diag.severity),
                    diag.rule_id.0
                )),
                diag.message
            )?;

            if let Some(ref span) = diag.span {
                writeln!(
                    writer,
                    "  {} {}:{}:{}",
                    dim.apply_to("-->"),
                    span.file.display(),
                    span.start_line,
                    span.start_col
                )?;
            }

            writeln!(writer)?;
        }

        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
