//! Show command: render the daylight view once.

use anyhow::Result;

use super::CommandContext;
use crate::geo::SunriseProvider;

/// Render today's values and the year's shortest day.
pub fn run_show_command(context: &CommandContext) -> Result<()> {
    let mut sink = context.sink();
    context.renderer(&SunriseProvider).initialize(sink.as_mut())?;
    context.finish();
    Ok(())
}

/// Display detailed help for the show command
pub fn display_help() {
    log_version!();
    log_block_start!("show - Show today's daylight");
    log_block_start!("Usage: daylight [OPTIONS] show");
    log_block_start!("Description:");
    log_indented!("Prints today's date, sunrise, sunset and day length for the");
    log_indented!("configured place, followed by the shortest day of the current");
    log_indented!("year and how much longer today is. Values that do not exist");
    log_indented!("(polar day or night) are shown as '–'.");
    log_indented!("This is the default when no command is given.");
    log_block_start!("Examples:");
    log_indented!("# Today");
    log_indented!("daylight");
    log_pipe!();
    log_indented!("# As of a given local time, as JSON");
    log_indented!("daylight --at \"2026-12-21 08:00:00\" --json show");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::RunOptions;
    use crate::config::Settings;
    use crate::logger::Log;
    use crate::time_source::FixedTimeSource;
    use chrono::{TimeZone, Utc};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_show_prints_decorated_view() {
        let clock = FixedTimeSource::new(Utc.with_ymd_and_hms(2026, 12, 1, 11, 0, 0).unwrap());
        let context =
            CommandContext::from_parts(Settings::default(), Box::new(clock), RunOptions::default());

        Log::start_capture();
        let result = run_show_command(&context);
        let output = Log::take_capture();

        result.unwrap();
        assert!(output.contains(
            "┣ Wassenberg (DE) · Lat 51.1013, Lon 6.1555 · Zeitzone Europe/Berlin"
        ));
        assert!(output.contains("┣ Dienstag, 01.12.2026"));
        assert!(output.contains("┣ Shortest day: "));
        assert!(output.contains("Difference:  +"));
        assert!(output.ends_with("╹\n"));
    }
}
