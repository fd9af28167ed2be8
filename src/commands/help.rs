//! Help command implementation for daylight.
//!
//! Shows command-specific help or the general command overview.

use anyhow::Result;

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("help") | Some("h") => display_help_help(),
        Some("show") => super::show::display_help(),
        Some("shortest") | Some("s") => super::shortest::display_help(),
        Some("watch") | Some("w") => super::watch::display_help(),
        Some(unknown) => {
            log_warning!("Unknown command: {unknown}");
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("show                    Show today's daylight (default)");
    log_indented!("watch, w                Show and refresh on key press");
    log_indented!("shortest, s [YEAR]      Show the shortest day of a year");
    log_indented!("help, h [COMMAND]       Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'daylight help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'daylight --help' to see all options and general usage.");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: daylight help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("# Show general help");
    log_indented!("daylight help");
    log_pipe!();
    log_indented!("# Show help for specific commands");
    log_indented!("daylight help watch");
    log_indented!("daylight help shortest");
    log_end!();
}
