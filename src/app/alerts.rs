use std::collections::HashMap;

use crate::types::{Timer, TimerId, TimerStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Halfway,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub timer_id: TimerId,
    pub name: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn message(&self) -> String {
        match self.kind {
            AlertKind::Halfway => format!("{} is halfway there!", self.name),
            AlertKind::Finished => format!("{} is complete!", self.name),
        }
    }
}

/// Watches snapshots for the halfway crossing and for running timers that hit zero.
///
/// Halfway means exactly 50% remaining, so odd durations never raise it. It
/// fires once per entry into that state and only for running timers; paused
/// and completed timers are not observed at all.
#[derive(Default)]
pub struct ProgressWatcher {
    at_halfway: HashMap<TimerId, bool>,
    pending: Vec<Alert>,
}

impl ProgressWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, timers: &[Timer]) {
        self.at_halfway
            .retain(|id, _| timers.iter().any(|t| &t.id == id));

        for timer in timers {
            if timer.status != TimerStatus::Running {
                continue;
            }
            let halfway = timer.duration > 0
                && timer.duration % 2 == 0
                && timer.remaining_time == timer.duration / 2;
            let was_halfway = self
                .at_halfway
                .insert(timer.id.clone(), halfway)
                .unwrap_or(false);
            if halfway && !was_halfway {
                self.push(timer, AlertKind::Halfway);
            }
            if timer.remaining_time == 0 && !self.is_pending_finish(&timer.id) {
                self.push(timer, AlertKind::Finished);
            }
        }
    }

    /// Alerts raised since the last drain, oldest first.
    pub fn drain(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.pending)
    }

    fn is_pending_finish(&self, id: &str) -> bool {
        self.pending
            .iter()
            .any(|a| a.timer_id == id && a.kind == AlertKind::Finished)
    }

    fn push(&mut self, timer: &Timer, kind: AlertKind) {
        self.pending.push(Alert {
            timer_id: timer.id.clone(),
            name: timer.name.clone(),
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(id: &str, duration: u64, remaining: u64) -> Timer {
        Timer {
            id: id.into(),
            name: format!("Timer {id}"),
            duration,
            remaining_time: remaining,
            category: "General".into(),
            status: TimerStatus::Running,
        }
    }

    fn kinds(alerts: &[Alert]) -> Vec<AlertKind> {
        alerts.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn halfway_fires_once_on_exact_fifty_percent() {
        let mut watcher = ProgressWatcher::new();
        for remaining in (0..=10).rev() {
            watcher.observe(&[running("a", 10, remaining)]);
            if remaining == 5 {
                let alerts = watcher.drain();
                assert_eq!(kinds(&alerts), [AlertKind::Halfway]);
                assert_eq!(alerts[0].message(), "Timer a is halfway there!");
            }
        }
        assert_eq!(kinds(&watcher.drain()), [AlertKind::Finished]);
    }

    #[test]
    fn huge_durations_are_observed_without_overflow() {
        let mut watcher = ProgressWatcher::new();
        watcher.observe(&[running("a", u64::MAX, u64::MAX)]);
        assert!(watcher.drain().is_empty());

        let half = u64::MAX - 1;
        watcher.observe(&[running("b", half, half / 2)]);
        assert_eq!(kinds(&watcher.drain()), [AlertKind::Halfway]);
    }

    #[test]
    fn odd_durations_never_reach_halfway() {
        let mut watcher = ProgressWatcher::new();
        for remaining in (1..=9).rev() {
            watcher.observe(&[running("a", 9, remaining)]);
        }
        assert!(watcher.drain().is_empty());
    }

    #[test]
    fn repeated_snapshots_at_halfway_do_not_refire() {
        let mut watcher = ProgressWatcher::new();
        watcher.observe(&[running("a", 10, 5)]);
        watcher.observe(&[running("a", 10, 5)]);
        assert_eq!(watcher.drain().len(), 1);
    }

    #[test]
    fn paused_timers_are_not_observed() {
        let mut watcher = ProgressWatcher::new();
        let mut timer = running("a", 10, 5);
        timer.status = TimerStatus::Paused;
        watcher.observe(&[timer.clone()]);
        assert!(watcher.drain().is_empty());

        timer.status = TimerStatus::Running;
        watcher.observe(&[timer]);
        assert_eq!(kinds(&watcher.drain()), [AlertKind::Halfway]);
    }

    #[test]
    fn pause_at_halfway_then_resume_stays_quiet() {
        let mut watcher = ProgressWatcher::new();
        let mut timer = running("a", 10, 5);
        watcher.observe(&[timer.clone()]);
        watcher.drain();
        timer.status = TimerStatus::Paused;
        watcher.observe(&[timer.clone()]);
        timer.status = TimerStatus::Running;
        watcher.observe(&[timer]);
        assert!(watcher.drain().is_empty());
    }

    #[test]
    fn finished_is_reported_once_per_drain() {
        let mut watcher = ProgressWatcher::new();
        watcher.observe(&[running("a", 3, 0)]);
        watcher.observe(&[running("a", 3, 0)]);
        let alerts = watcher.drain();
        assert_eq!(kinds(&alerts), [AlertKind::Finished]);
        assert_eq!(alerts[0].message(), "Timer a is complete!");
    }

    #[test]
    fn completed_timers_are_ignored() {
        let mut watcher = ProgressWatcher::new();
        let mut timer = running("a", 10, 0);
        timer.status = TimerStatus::Completed;
        watcher.observe(&[timer]);
        assert!(watcher.drain().is_empty());
    }
}
