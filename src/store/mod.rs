//! Application state: the timer and theme stores, their reducer, persistence and tick source.
mod command;
pub mod persist;
mod reducer;
mod scheduler;
mod theme;
mod timers;
pub mod views;

pub use command::Command;
pub use scheduler::TICK_PERIOD;
pub use theme::ThemeStore;
pub use timers::{SubscriptionId, TimerStore};
