//! Pure reduction of a timer collection by a command.
//!
//! ```text
//! paused -> running -> (paused | completed)
//! ```
//!
//! Nothing here performs I/O. Every arm builds a new vector; untouched timers
//! keep their position and value.

use crate::types::{Timer, TimerStatus};

use super::command::Command;

pub fn reduce(timers: &[Timer], command: &Command) -> Vec<Timer> {
    match command {
        Command::Add {
            id,
            name,
            duration,
            category,
        } => {
            let mut next = timers.to_vec();
            next.push(Timer::new(
                id.clone(),
                name.clone(),
                *duration,
                category.clone(),
            ));
            next
        }
        Command::Start(id) => replace_where(timers, |t| &t.id == id, |t| {
            with_status(t, TimerStatus::Running)
        }),
        Command::Pause(id) => replace_where(timers, |t| &t.id == id, |t| {
            with_status(t, TimerStatus::Paused)
        }),
        Command::Reset(id) => replace_where(timers, |t| &t.id == id, |t| Timer {
            remaining_time: t.duration,
            status: TimerStatus::Paused,
            ..t.clone()
        }),
        Command::Tick { id, remaining } => replace_where(timers, |t| &t.id == id, |t| Timer {
            remaining_time: *remaining,
            ..t.clone()
        }),
        Command::Delete(id) => timers.iter().filter(|t| &t.id != id).cloned().collect(),
        Command::StartAll => replace_where(timers, Timer::is_paused, |t| {
            with_status(t, TimerStatus::Running)
        }),
        Command::PauseAll => replace_where(timers, Timer::is_running, |t| {
            with_status(t, TimerStatus::Paused)
        }),
        Command::ResetAll => replace_where(timers, Timer::is_paused, |t| Timer {
            remaining_time: t.duration,
            ..t.clone()
        }),
        Command::StartCategory(category) => replace_where(
            timers,
            |t| &t.category == category && t.is_paused(),
            |t| with_status(t, TimerStatus::Running),
        ),
        Command::PauseCategory(category) => replace_where(
            timers,
            |t| &t.category == category && t.is_running(),
            |t| with_status(t, TimerStatus::Paused),
        ),
        Command::Complete(id) => replace_where(timers, |t| &t.id == id, |t| {
            with_status(t, TimerStatus::Completed)
        }),
        Command::LoadAll(snapshot) => snapshot.clone(),
    }
}

fn replace_where(
    timers: &[Timer],
    matches: impl Fn(&Timer) -> bool,
    update: impl Fn(&Timer) -> Timer,
) -> Vec<Timer> {
    timers
        .iter()
        .map(|t| if matches(t) { update(t) } else { t.clone() })
        .collect()
}

fn with_status(timer: &Timer, status: TimerStatus) -> Timer {
    Timer {
        status,
        ..timer.clone()
    }
}
