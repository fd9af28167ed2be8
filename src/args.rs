//! Command-line argument parsing and processing.
//!
//! Options may appear before or after the command. The first non-option
//! argument selects the command; `show` is used when none is given.

/// Options shared by every rendering command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    /// Wall-clock "YYYY-MM-DD HH:MM:SS" in the configured zone, used as now
    pub at: Option<String>,
    pub json: bool,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Render the daylight view once
    Show(RunOptions),
    /// Render, then re-render on key press until quit
    Watch(RunOptions),
    /// Print the shortest day of a year (current year if `None`)
    Shortest {
        options: RunOptions,
        year: Option<i32>,
    },
    /// Detailed help, optionally for one command
    Help { command: Option<String> },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit with an error
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped. Version takes
    /// precedence over help, and help over everything else.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut options = RunOptions::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut invalid_arg_found = false;
        let mut positionals: Vec<String> = Vec::new();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--json" | "-j" => options.json = true,
                "--config" | "-c" => {
                    // Parse: --config <directory>
                    if i + 1 < args_vec.len() && !args_vec[i + 1].starts_with('-') {
                        options.config_dir = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        log_warning!(
                            "Missing directory for --config. Usage: --config <directory>"
                        );
                        invalid_arg_found = true;
                    }
                }
                "--at" | "-a" => {
                    // Parse: --at "YYYY-MM-DD HH:MM:SS"
                    if i + 1 < args_vec.len() && looks_like_datetime(&args_vec[i + 1]) {
                        options.at = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        log_error!(
                            "Missing or malformed time for --at. Use \"YYYY-MM-DD HH:MM:SS\""
                        );
                        invalid_arg_found = true;
                    }
                }
                _ => {
                    if arg_str.starts_with('-') && !is_negative_number(arg_str) {
                        log_warning!("Unknown option: {arg_str}");
                        invalid_arg_found = true;
                    } else {
                        positionals.push(arg_str.clone());
                    }
                }
            }
            i += 1;
        }

        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }

        let mut positionals = positionals.into_iter();
        let command = positionals.next();
        let rest: Vec<String> = positionals.collect();

        if display_help {
            // `daylight watch --help` shows the help of that command
            let action = match command {
                Some(command) if !invalid_arg_found => CliAction::Help {
                    command: Some(command),
                },
                _ => CliAction::ShowHelp,
            };
            return ParsedArgs { action };
        }

        if invalid_arg_found {
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let action = match command.as_deref() {
            None | Some("show") => match rest.first() {
                None => CliAction::Show(options),
                Some(extra) => unexpected_argument("show", extra),
            },
            Some("watch") | Some("w") => match rest.first() {
                None => CliAction::Watch(options),
                Some(extra) => unexpected_argument("watch", extra),
            },
            Some("shortest") | Some("s") => match rest.as_slice() {
                [] => CliAction::Shortest {
                    options,
                    year: None,
                },
                [year] => match parse_year(year) {
                    Some(year) => CliAction::Shortest {
                        options,
                        year: Some(year),
                    },
                    None => {
                        log_error!("Invalid year: {year}. Usage: daylight shortest [YEAR]");
                        CliAction::ShowHelpDueToError
                    }
                },
                [_, extra, ..] => unexpected_argument("shortest", extra),
            },
            Some("help") | Some("h") => match rest.as_slice() {
                [] => CliAction::Help { command: None },
                [command] => CliAction::Help {
                    command: Some(command.clone()),
                },
                [_, extra, ..] => unexpected_argument("help", extra),
            },
            Some(unknown) => {
                log_warning!("Unknown command: {unknown}");
                CliAction::ShowHelpDueToError
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

fn unexpected_argument(command: &str, arg: &str) -> CliAction {
    log_warning!("Unexpected argument for {command}: {arg}");
    CliAction::ShowHelpDueToError
}

/// Basic shape check for "YYYY-MM-DD HH:MM:SS"; full parsing needs the zone.
fn looks_like_datetime(s: &str) -> bool {
    let bytes = s.trim().as_bytes();
    bytes.len() == 19
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b' '
        && bytes[13] == b':'
        && bytes[16] == b':'
}

fn is_negative_number(s: &str) -> bool {
    s.len() > 1 && s[1..].chars().all(|c| c.is_ascii_digit())
}

/// Years accepted by `shortest`. chrono supports far more, but dates outside
/// this range are not meaningful for sunrise tables.
fn parse_year(s: &str) -> Option<i32> {
    s.parse::<i32>()
        .ok()
        .filter(|year| (1..=9999).contains(year))
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("daylight [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-a, --at <datetime>    Use \"YYYY-MM-DD HH:MM:SS\" (configured zone) as now");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-j, --json             Print values as JSON");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("show                   Show today's daylight (default)");
    log_indented!("watch, w               Show and refresh on key press");
    log_indented!("shortest, s [YEAR]     Show the shortest day of a year");
    log_indented!("help, h [COMMAND]      Show detailed help for a command");
    log_end!();
}
