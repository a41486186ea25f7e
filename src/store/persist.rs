/// Snapshot encoding for the two persisted keys.
use crate::db::KeyValueStore;
use crate::error::StorageError;
use crate::types::{ThemeMode, Timer};

pub const TIMERS_KEY: &str = "timers";
pub const THEME_KEY: &str = "theme";

/// `Ok(None)` when nothing has been saved yet.
pub fn load_timers(storage: &dyn KeyValueStore) -> Result<Option<Vec<Timer>>, StorageError> {
    match storage.get(TIMERS_KEY)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

pub fn save_timers(storage: &dyn KeyValueStore, timers: &[Timer]) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec(timers)?;
    storage.set(TIMERS_KEY, &bytes)
}

/// The theme is stored as the bare string, not as JSON.
pub fn load_theme(storage: &dyn KeyValueStore) -> Result<Option<ThemeMode>, StorageError> {
    let Some(bytes) = storage.get(THEME_KEY)? else {
        return Ok(None);
    };
    let raw = String::from_utf8_lossy(&bytes);
    ThemeMode::parse(raw.trim())
        .map(Some)
        .ok_or_else(|| StorageError::InvalidTheme(raw.into_owned()))
}

pub fn save_theme(storage: &dyn KeyValueStore, mode: ThemeMode) -> Result<(), StorageError> {
    storage.set(THEME_KEY, mode.as_str().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, MemoryStore};
    use crate::types::TimerStatus;

    fn sample() -> Vec<Timer> {
        let mut running = Timer::new("b".into(), "Run".into(), 90, "Workout".into());
        running.status = TimerStatus::Running;
        running.remaining_time = 12;
        vec![
            Timer::new("a".into(), "Plank".into(), 60, "Workout".into()),
            running,
        ]
    }

    #[test]
    fn timers_round_trip_through_sqlite() {
        let conn = db::open_in_memory().unwrap();
        save_timers(&conn, &sample()).unwrap();
        assert_eq!(load_timers(&conn).unwrap(), Some(sample()));
    }

    #[test]
    fn stored_layout_matches_the_documented_format() {
        let store = MemoryStore::new();
        save_timers(&store, &sample()[..1]).unwrap();
        let raw = String::from_utf8(store.raw(TIMERS_KEY).unwrap()).unwrap();
        assert_eq!(
            raw,
            r#"[{"id":"a","name":"Plank","duration":60,"remainingTime":60,"category":"Workout","status":"paused"}]"#
        );
    }

    #[test]
    fn corrupt_timers_surface_as_json_error() {
        let store = MemoryStore::with_value(TIMERS_KEY, b"{not json");
        assert!(matches!(load_timers(&store), Err(StorageError::Json(_))));
    }

    #[test]
    fn theme_is_stored_as_plain_string() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store).unwrap(), None);
        save_theme(&store, ThemeMode::Dark).unwrap();
        assert_eq!(store.raw(THEME_KEY).unwrap(), b"dark");
        assert_eq!(load_theme(&store).unwrap(), Some(ThemeMode::Dark));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let store = MemoryStore::with_value(THEME_KEY, b"sepia");
        assert!(matches!(
            load_theme(&store),
            Err(StorageError::InvalidTheme(value)) if value == "sepia"
        ));
    }
}
