/// Persisted light/dark preference.
use std::rc::Rc;

use crate::db::KeyValueStore;
use crate::types::ThemeMode;

use super::persist;

pub struct ThemeStore {
    storage: Rc<dyn KeyValueStore>,
    mode: ThemeMode,
}

impl ThemeStore {
    pub fn open(storage: Rc<dyn KeyValueStore>) -> Self {
        let mode = match persist::load_theme(&*storage) {
            Ok(Some(mode)) => mode,
            Ok(None) => ThemeMode::default(),
            Err(err) => {
                tracing::error!(error = %err, "failed to load theme from storage");
                ThemeMode::default()
            }
        };
        tracing::debug!(theme = %mode, "theme loaded");
        Self { storage, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle(&mut self) {
        self.set(self.mode.toggled());
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(err) = persist::save_theme(&*self.storage, mode) {
            tracing::error!(error = %err, "failed to save theme to storage");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::store::persist::THEME_KEY;

    #[test]
    fn defaults_to_light_when_nothing_saved() {
        let store = ThemeStore::open(Rc::new(MemoryStore::new()));
        assert_eq!(store.mode(), ThemeMode::Light);
        assert!(!store.is_dark());
    }

    #[test]
    fn toggle_flips_and_persists() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = ThemeStore::open(storage.clone());
        store.toggle();
        assert!(store.is_dark());
        assert_eq!(storage.raw(THEME_KEY).unwrap(), b"dark");
        store.toggle();
        assert_eq!(storage.raw(THEME_KEY).unwrap(), b"light");

        let reopened = ThemeStore::open(storage);
        assert_eq!(reopened.mode(), ThemeMode::Light);
    }

    #[test]
    fn set_saves_even_when_unchanged() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = ThemeStore::open(storage.clone());
        store.set(ThemeMode::Light);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn storage_failures_fall_back_and_keep_value() {
        let storage = Rc::new(MemoryStore::with_value(THEME_KEY, b"dark"));
        storage.fail_reads.set(true);
        storage.fail_writes.set(true);
        let mut store = ThemeStore::open(storage.clone());
        assert_eq!(store.mode(), ThemeMode::Light);
        store.set(ThemeMode::Dark);
        assert!(store.is_dark());
        assert_eq!(storage.raw(THEME_KEY).unwrap(), b"dark");
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn unknown_stored_value_uses_default() {
        let storage = Rc::new(MemoryStore::with_value(THEME_KEY, b"solarized"));
        assert_eq!(ThemeStore::open(storage).mode(), ThemeMode::Light);
    }
}
