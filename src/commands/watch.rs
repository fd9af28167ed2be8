//! Watch command: render, then render again whenever the user asks.
//!
//! There is no timer. The view only changes on an explicit refresh, which
//! re-reads the clock and recomputes everything.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::CommandContext;
use crate::geo::SunriseProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchAction {
    Refresh,
    Quit,
}

/// Map a key press to an action; other keys are ignored.
pub fn action_for_key(key: KeyEvent) -> Option<WatchAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(WatchAction::Refresh),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(WatchAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(WatchAction::Quit),
        _ => None,
    }
}

/// Raw mode for the duration of one key read.
///
/// Output is printed with raw mode off so line endings render normally.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Block until a key with an action is pressed.
fn wait_for_action() -> Result<WatchAction> {
    let _guard = RawModeGuard::enable()?;

    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for_key(key)
        {
            return Ok(action);
        }
    }
}

pub fn run_watch_command(context: &CommandContext) -> Result<()> {
    let renderer = context.renderer(&SunriseProvider);
    let mut sink = context.sink();

    renderer.initialize(sink.as_mut())?;

    loop {
        if !context.options.json {
            log_pipe!();
            log_info!("Press 'r' or Enter to refresh, 'q' or Esc to quit");
        }

        match wait_for_action()? {
            WatchAction::Refresh => renderer.refresh(sink.as_mut())?,
            WatchAction::Quit => break,
        }
    }

    context.finish();
    Ok(())
}

/// Display detailed help for the watch command
pub fn display_help() {
    log_version!();
    log_block_start!("watch - Show today's daylight and refresh on demand");
    log_block_start!("Usage: daylight [OPTIONS] watch");
    log_block_start!("Keys:");
    log_indented!("r, Enter           Recompute with the current time");
    log_indented!("q, Esc, Ctrl+C     Quit");
    log_block_start!("Description:");
    log_indented!("Renders the same view as 'show' and waits for a key. Each");
    log_indented!("refresh reads the clock again, so a view left open over");
    log_indented!("midnight moves to the new day. With --json, one JSON object");
    log_indented!("is printed per refresh.");
    log_end!();
}
