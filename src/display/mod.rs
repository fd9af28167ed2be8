//! Turning computed values into strings and handing them to an output.

pub mod format;
pub mod sink;

pub use format::{DateTimeFormatter, fmt_duration, fmt_signed_duration, parse_locale};
pub use sink::{DisplaySink, JsonSink, MemorySink, Slot, TerminalSink};
