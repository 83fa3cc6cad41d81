//! vue-pug-lint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::Style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vue_pug_lint::cli::{Cli, CommandContext, CommandDispatcher};
use vue_pug_lint::config::find_project_root;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout stays parseable for JSON and SARIF output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("vue_pug_lint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vue_pug_lint=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Check if colors should be enabled.
fn should_use_colors(no_color: bool) -> bool {
    // https://no-color.org/
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("vue-pug-lint starting with args: {:?}", cli);

    let cwd = std::env::current_dir().unwrap_or_default();
    let project_root = cli
        .project
        .clone()
        .or_else(|| find_project_root(&cwd))
        .unwrap_or(cwd);

    let use_color = should_use_colors(cli.no_color);
    let dispatcher = CommandDispatcher::new(CommandContext {
        project_root,
        config_path: cli.config.clone(),
        use_color,
    });

    let mut stdout = std::io::stdout().lock();
    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let style = if use_color {
                Style::new().red().bold()
            } else {
                Style::new()
            };
            eprintln!("{} {}", style.apply_to("Error:"), e);
            if e.is_config_error() {
                eprintln!("Run `vue-pug-lint schema` to see the accepted config format.");
            }
            ExitCode::from(2)
        }
    }
}
