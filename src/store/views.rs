/// Derived, read-only views over the timer collection.
use crate::types::Timer;

/// Distinct non-empty categories of timers that are not completed, in first-seen order.
pub fn active_categories(timers: &[Timer]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for timer in timers {
        if timer.is_completed() || timer.category.is_empty() {
            continue;
        }
        if !categories.contains(&timer.category.as_str()) {
            categories.push(timer.category.as_str());
        }
    }
    categories
}

pub fn active_in_category<'a>(timers: &'a [Timer], category: &str) -> Vec<&'a Timer> {
    timers
        .iter()
        .filter(|t| t.category == category && !t.is_completed())
        .collect()
}

/// True when every active timer of the category is paused, so the category action means "start".
pub fn category_is_paused(timers: &[Timer], category: &str) -> bool {
    active_in_category(timers, category)
        .iter()
        .all(|t| t.is_paused())
}

pub fn completed(timers: &[Timer]) -> Vec<&Timer> {
    timers.iter().filter(|t| t.is_completed()).collect()
}

/// Remaining share of the duration, in percent. Zero-length timers report 0.
pub fn progress_percent(timer: &Timer) -> f64 {
    if timer.duration == 0 {
        return 0.0;
    }
    timer.remaining_time as f64 / timer.duration as f64 * 100.0
}
