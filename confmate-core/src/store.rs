//! Device-local preference persistence.
//!
//! One JSON file per key under the state directory. Reminder functionality
//! is best-effort, not critical-path: reads fall back to the type's default
//! on any failure, and writes are swallowed after a logged diagnostic so
//! bookkeeping never takes the caller down.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CompanionError, CompanionResult};

/// Session keys the user wants notified about.
pub const REMINDERS_KEY: &str = "reminders";
/// Speaker ids the user follows.
pub const FOLLOWED_SPEAKERS_KEY: &str = "followed_speakers";
/// Session keys already notified (at-most-once guard).
pub const NOTIFIED_KEY: &str = "notified";
/// Highest announcement id the user has seen in the notifications view.
pub const NOTIF_READ_KEY: &str = "notif_read";
/// Highest announcement id whose banner the user dismissed.
pub const BANNER_DISMISSED_KEY: &str = "banner_dismissed";
/// Global notification opt-out for this device.
pub const MUTED_KEY: &str = "muted";

/// Typed key-value persistence over a state directory.
#[derive(Clone)]
pub struct PrefStore {
    dir: PathBuf,
}

impl PrefStore {
    pub fn new(dir: PathBuf) -> Self {
        PrefStore { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read a key. A missing file, unreadable file, or corrupt JSON yields
    /// the type's default (empty set, zero, false) — the next successful
    /// write overwrites whatever was there.
    pub fn get<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.path_for(key);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return T::default();
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Corrupt state in {}: {e}", path.display());
                T::default()
            }
        }
    }

    /// Write a key (atomic via temp file + rename). Failures are logged
    /// and swallowed.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            log::warn!("Could not persist '{key}': {e}");
        }
    }

    fn try_set<T: Serialize>(&self, key: &str, value: &T) -> CompanionResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        let content = serde_json::to_string(value)
            .map_err(|e| CompanionError::Serialization(e.to_string()))?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn temp_store() -> (tempfile::TempDir, PrefStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::new(dir.path().join("state"));
        (dir, store)
    }

    #[test]
    fn test_missing_key_yields_default() {
        let (_dir, store) = temp_store();
        let set: BTreeSet<String> = store.get(REMINDERS_KEY);
        assert!(set.is_empty());
        assert_eq!(store.get::<i64>(NOTIF_READ_KEY), 0);
        assert!(!store.get::<bool>(MUTED_KEY));
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let (_dir, store) = temp_store();
        let mut set = BTreeSet::new();
        set.insert("2026-03-10|09:00|Keynote".to_string());
        store.set(REMINDERS_KEY, &set);
        assert_eq!(store.get::<BTreeSet<String>>(REMINDERS_KEY), set);
    }

    #[test]
    fn test_corrupt_json_yields_default_then_recovers() {
        let (_dir, store) = temp_store();
        std::fs::create_dir_all(store.dir.clone()).unwrap();
        std::fs::write(store.path_for(NOTIF_READ_KEY), "{not json").unwrap();

        assert_eq!(store.get::<i64>(NOTIF_READ_KEY), 0);

        store.set(NOTIF_READ_KEY, &7i64);
        assert_eq!(store.get::<i64>(NOTIF_READ_KEY), 7);
    }
}
