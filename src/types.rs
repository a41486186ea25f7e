use std::fmt;

use chrono::Local;
use rand::RngExt;
use serde::{Deserialize, Serialize};

pub type TimerId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Running,
    Paused,
    Completed,
}

///A single countdown. Records are replaced on update, never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: TimerId,
    pub name: String,
    /// Total length in seconds.
    pub duration: u64,
    /// Seconds left, `0..=duration`.
    pub remaining_time: u64,
    pub category: String,
    pub status: TimerStatus,
}

impl Timer {
    /// Fresh timer as created by the add command: full time left, paused.
    pub fn new(id: TimerId, name: String, duration: u64, category: String) -> Self {
        Self {
            id,
            name,
            duration,
            remaining_time: duration,
            category,
            status: TimerStatus::Paused,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status == TimerStatus::Paused
    }

    pub fn is_completed(&self) -> bool {
        self.status == TimerStatus::Completed
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories offered by the new-timer form.
pub const PRESET_CATEGORIES: &[&str] = &["General", "Workout", "Study", "Break"];

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate an opaque timer id: base-36 millisecond timestamp plus a random suffix.
pub fn new_timer_id() -> TimerId {
    let mut millis = Local::now().timestamp_millis().max(0) as u64;
    let mut stamp = Vec::new();
    loop {
        stamp.push(BASE36[(millis % 36) as usize]);
        millis /= 36;
        if millis == 0 {
            break;
        }
    }
    stamp.reverse();

    let mut rng = rand::rng();
    for _ in 0..4 {
        stamp.push(BASE36[rng.random_range(0..BASE36.len())]);
    }
    String::from_utf8_lossy(&stamp).into_owned()
}
