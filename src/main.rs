//! Application entry point.
//!
//! Parses the command line and dispatches to the command handlers in the
//! library. Configuration errors are fatal: they are reported with
//! `log_error_exit!` and the process exits with status 1.

use anyhow::Result;

use daylight::args::{self, CliAction, ParsedArgs, RunOptions};
use daylight::commands::{self, CommandContext};
use daylight::constants::EXIT_FAILURE;
use daylight::logger::Log;
use daylight::log_error_exit;

fn run_with_context(
    options: RunOptions,
    command: impl FnOnce(&CommandContext) -> Result<()>,
) -> Result<()> {
    let context = CommandContext::prepare(options)?;
    command(&context)
}

fn run(action: CliAction) -> Result<()> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Help { command } => commands::help::run_help_command(command.as_deref()),
        CliAction::Show(options) => run_with_context(options, commands::show::run_show_command),
        CliAction::Watch(options) => run_with_context(options, commands::watch::run_watch_command),
        CliAction::Shortest { options, year } => run_with_context(options, |context| {
            commands::shortest::run_shortest_command(context, year)
        }),
    }
}

fn main() {
    let parsed_args = ParsedArgs::from_env();

    if let Err(e) = run(parsed_args.action) {
        // Errors are reported even when --json silenced the log
        Log::set_enabled(true);
        log_error_exit!("{e:#}");
        std::process::exit(EXIT_FAILURE);
    }
}
