use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(AppEvent::KeyPress(key.code)));
            }
        }
    }
    Ok(None)
}

/// Runs the main event loop until the app stops.
///
/// Input is polled with a short timeout; pending scheduler fires are
/// drained on every pass so a burst of keys never starves the countdown.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let poll_rate = Duration::from_millis(250);

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(poll_rate)? {
            app.update(event);
        }
        app.update(AppEvent::Tick);
    }
    Ok(())
}
