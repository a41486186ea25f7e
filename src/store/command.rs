use crate::types::{Timer, TimerId};

/// The closed set of mutations the timer store accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add {
        id: TimerId,
        name: String,
        duration: u64,
        category: String,
    },
    Start(TimerId),
    Pause(TimerId),
    Reset(TimerId),
    /// Overwrite the remaining seconds; status is left alone.
    Tick {
        id: TimerId,
        remaining: u64,
    },
    Delete(TimerId),
    StartAll,
    PauseAll,
    /// Only timers that are paused right now get their time back.
    ResetAll,
    StartCategory(String),
    PauseCategory(String),
    Complete(TimerId),
    /// Replace the whole collection verbatim.
    LoadAll(Vec<Timer>),
}

impl Command {
    /// Short name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Start(_) => "start",
            Command::Pause(_) => "pause",
            Command::Reset(_) => "reset",
            Command::Tick { .. } => "tick",
            Command::Delete(_) => "delete",
            Command::StartAll => "start_all",
            Command::PauseAll => "pause_all",
            Command::ResetAll => "reset_all",
            Command::StartCategory(_) => "start_category",
            Command::PauseCategory(_) => "pause_category",
            Command::Complete(_) => "complete",
            Command::LoadAll(_) => "load_all",
        }
    }
}
