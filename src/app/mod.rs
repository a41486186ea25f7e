mod alerts;
mod state;

use crossterm::event::KeyCode;

use alerts::{AlertKind, ProgressWatcher};
pub use state::{App, ConfirmPopup, NewTimerField, NewTimerPopup, Row};

/// Possible input events the app reacts to.
pub enum AppEvent {
    /// Drain scheduler fires and pending alerts.
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Timers,
    History,
    Help,
}
