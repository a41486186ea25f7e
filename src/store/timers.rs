//! The timer store container.
//!
//! One instance per session. It loads the persisted collection once on
//! construction, reduces commands against it, saves after every dispatch
//! and notifies subscribers. Storage failures are logged and swallowed.

use std::rc::Rc;
use std::time::Duration;

use crate::db::KeyValueStore;
use crate::types::Timer;

use super::command::Command;
use super::persist;
use super::reducer::reduce;
use super::scheduler::Ticker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[Timer])>;

pub struct TimerStore {
    storage: Rc<dyn KeyValueStore>,
    timers: Vec<Timer>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    ticker: Option<Ticker>,
}

impl TimerStore {
    /// Build the store and load the persisted collection. A failed load leaves it empty.
    /// Commands can only reach a store that `open` returned, so nothing is saved before the load.
    pub fn open(storage: Rc<dyn KeyValueStore>) -> Self {
        let mut store = Self {
            storage,
            timers: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            ticker: None,
        };
        match persist::load_timers(&*store.storage) {
            Ok(Some(snapshot)) => {
                tracing::info!(count = snapshot.len(), "timers loaded");
                store.timers = reduce(&store.timers, &Command::LoadAll(snapshot));
            }
            Ok(None) => tracing::info!("no saved timers"),
            Err(err) => tracing::error!(error = %err, "failed to load timers from storage"),
        }
        store
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn find(&self, id: &str) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id == id)
    }

    pub fn dispatch(&mut self, command: Command) {
        tracing::trace!(command = command.kind(), "dispatch");
        self.timers = reduce(&self.timers, &command);
        self.save();
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.timers);
        }
    }

    fn save(&self) {
        if let Err(err) = persist::save_timers(&*self.storage, &self.timers) {
            tracing::error!(error = %err, "failed to save timers to storage");
        }
    }

    /// Register a callback that receives every new snapshot.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Timer]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// One scheduler fire: count every running timer down by a second.
    pub fn tick(&mut self) {
        let due: Vec<Command> = self
            .timers
            .iter()
            .filter(|t| t.is_running() && t.remaining_time > 0)
            .map(|t| Command::Tick {
                id: t.id.clone(),
                remaining: t.remaining_time.saturating_sub(1),
            })
            .collect();
        for command in due {
            self.dispatch(command);
        }
    }

    /// Start the background tick source. Idempotent.
    pub fn arm_ticker(&mut self, period: Duration) {
        self.ticker
            .get_or_insert_with(|| Ticker::new(period))
            .arm();
    }

    /// Apply every tick that fired since the last call. Returns how many ran.
    pub fn run_pending_ticks(&mut self) -> usize {
        let fired = self.ticker.as_ref().map_or(0, Ticker::take_fired);
        for _ in 0..fired {
            self.tick();
        }
        fired
    }

    #[cfg(test)]
    pub fn ticker_armed(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_armed)
    }

    /// Tear down the tick source. Also happens on drop.
    pub fn shutdown(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.disarm();
        }
    }
}
