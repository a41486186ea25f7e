//! Fixed-period tick source.
//!
//! The ticker thread only signals; it never touches timer state. The owner
//! drains the fires with [`Ticker::take_fired`] on its own thread, which keeps
//! every reduction on a single execution context.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Period of the countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

struct Armed {
    stop: Sender<()>,
    fired: Receiver<()>,
    thread: JoinHandle<()>,
}

/// A repeating timer that is released when dropped.
pub struct Ticker {
    period: Duration,
    armed: Option<Armed>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: None,
        }
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Start firing. Arming an armed ticker does nothing.
    pub fn arm(&mut self) {
        if self.armed.is_some() {
            return;
        }
        let (stop, stop_rx) = mpsc::channel::<()>();
        let (fire_tx, fired) = mpsc::channel::<()>();
        let period = self.period;
        let thread = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if fire_tx.send(()).is_err() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "ticker armed");
        self.armed = Some(Armed {
            stop,
            fired,
            thread,
        });
    }

    /// Stop firing and wait for the thread to exit. Pending fires are discarded.
    pub fn disarm(&mut self) {
        let Some(armed) = self.armed.take() else {
            return;
        };
        drop(armed.stop);
        if armed.thread.join().is_err() {
            tracing::error!("ticker thread panicked");
        }
        tracing::debug!("ticker disarmed");
    }

    /// Number of fires since the last call. Never blocks.
    pub fn take_fired(&self) -> usize {
        match &self.armed {
            Some(armed) => armed.fired.try_iter().count(),
            None => 0,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.disarm();
    }
}
