//! Structured logging with box-drawing output.
//!
//! All terminal output of daylight goes through the macros in this module so
//! that the decorated view keeps one consistent shape:
//!
//! ```text
//! ┏ daylight v0.1.0 ━━╸
//! ┃
//! ┣ Wassenberg (DE) · Lat 51.1013, Lon 6.1555 · Zeitzone Europe/Berlin
//! ┃   Sunrise: 08:12:33
//! ╹
//! ```
//!
//! Logging can be switched off at runtime (JSON output, tests) and can be
//! captured into a buffer instead of stdout. Capture is per thread, so a
//! capturing test only sees what its own thread logged.

use std::cell::RefCell;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

thread_local! {
    // When set, this thread's output is appended here instead of being printed
    static CAPTURE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Line shapes produced by the logging macros.
///
/// ## Conventions
///
/// - **`log_block_start!`** opens a new conceptual block: an empty `┃` line
///   followed by `┣ message`. Details of the block follow with
///   `log_decorated!` or `log_indented!`.
/// - **`log_decorated!`** prints `┣ message` as part of the current block.
/// - **`log_indented!`** prints `┃   message` for nested details.
/// - **`log_pipe!`** prints a lone `┃` for spacing before a semantic message.
/// - **`log_version!`** prints the `┏ daylight vX.Y.Z ━━╸` header once.
/// - **`log_end!`** prints the closing `╹`.
/// - **`log_info!`, `log_warning!`, `log_error!`, `log_debug!`** carry a
///   colored `[LEVEL]` tag after the `┣` marker.
/// - **`log_error_exit!`** closes the output with `┗[ERROR] message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Decorated,
    Indented,
    Pipe,
    BlockStart,
    Version,
    End,
    Info,
    Warning,
    Error,
    ErrorExit,
    Debug,
}

impl Shape {
    /// Render one message in this shape, including the trailing newline.
    pub fn render(self, message: &str) -> String {
        match self {
            Shape::Decorated => format!("┣ {message}\n"),
            Shape::Indented => format!("┃   {message}\n"),
            Shape::Pipe => "┃\n".to_string(),
            Shape::BlockStart => format!("┃\n┣ {message}\n"),
            Shape::Version => format!("┏ {message} ━━╸\n"),
            Shape::End => "╹\n".to_string(),
            Shape::Info => format!("┣[\x1b[32mINFO\x1b[0m] {message}\n"),
            Shape::Warning => format!("┣[\x1b[33mWARNING\x1b[0m] {message}\n"),
            Shape::Error => format!("┣[\x1b[31mERROR\x1b[0m] {message}\n"),
            Shape::ErrorExit => format!("┃\n┗[\x1b[31mERROR\x1b[0m] {message}\n"),
            Shape::Debug => format!("┣[\x1b[32mDEBUG\x1b[0m] {message}\n"),
        }
    }
}

pub struct Log;

impl Log {
    /// Enable or disable logging.
    ///
    /// Used to keep stdout clean for JSON output and to quiet tests.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Start collecting this thread's output in memory instead of printing it.
    pub fn start_capture() {
        CAPTURE.with(|capture| *capture.borrow_mut() = Some(String::new()));
    }

    /// Stop capturing and return everything this thread wrote since
    /// `start_capture`.
    pub fn take_capture() -> String {
        CAPTURE.with(|capture| capture.borrow_mut().take().unwrap_or_default())
    }
}

/// Strip ANSI color sequences (`ESC [ ... m`) from text.
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch == 'm' {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Write one message in the given shape. Called by the macros.
pub fn emit(shape: Shape, message: &str) {
    if !Log::is_enabled() {
        return;
    }
    write_output(&shape.render(message));
}

/// Route formatted text to the capture buffer or stdout.
pub fn write_output(text: &str) {
    let captured = CAPTURE.with(|capture| match capture.borrow_mut().as_mut() {
        Some(buffer) => {
            buffer.push_str(&strip_ansi_codes(text));
            true
        }
        None => false,
    });
    if captured {
        return;
    }

    print!("{text}");
    let _ = std::io::stdout().flush();
}

// # Logging Macros

#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Shape::Decorated, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Shape::Indented, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_pipe {
    () => {
        $crate::logger::emit($crate::logger::Shape::Pipe, "")
    };
}

#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Shape::BlockStart, &format!($($arg)*))
    };
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {
        $crate::logger::emit(
            $crate::logger::Shape::Version,
            concat!("daylight v", env!("CARGO_PKG_VERSION")),
        )
    };
}

#[macro_export]
macro_rules! log_end {
    () => {
        $crate::logger::emit($crate::logger::Shape::End, "")
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Shape::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Shape::Warning, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Shape::Error, &format!($($arg)*))
    };
}

/// Log an error that terminates the output, closing the box with `┗`.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Shape::ErrorExit, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Shape::Debug, &format!($($arg)*))
    };
}
