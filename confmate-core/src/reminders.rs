//! Reminder and followed-speaker bookkeeping.
//!
//! All three persisted sets (reminders, followed speakers, notified keys)
//! live behind a [`PrefStore`]; every mutation is a read-modify-write of
//! the relevant set, persisted immediately. Single-threaded callers only;
//! concurrent writers get last-write-wins on the whole set.

use std::collections::BTreeSet;

use crate::agenda::Session;
use crate::schedule::{ScheduleIndex, session_key};
use crate::store::{self, PrefStore};

/// Told after every registry mutation so dependent views can refresh.
/// The registry has no rendering knowledge; absence of a listener is an
/// explicit `None`, never a runtime probe.
pub trait ChangeListener {
    fn reminders_changed(&self) {}
    fn followed_changed(&self) {}
}

/// The set of sessions the user wants notified about, plus the speakers
/// whose sessions are followed wholesale.
pub struct ReminderRegistry {
    store: PrefStore,
    listener: Option<Box<dyn ChangeListener>>,
}

impl ReminderRegistry {
    pub fn new(store: PrefStore) -> Self {
        ReminderRegistry {
            store,
            listener: None,
        }
    }

    pub fn with_listener(store: PrefStore, listener: Box<dyn ChangeListener>) -> Self {
        ReminderRegistry {
            store,
            listener: Some(listener),
        }
    }

    pub fn reminders(&self) -> BTreeSet<String> {
        self.store.get(store::REMINDERS_KEY)
    }

    pub fn followed(&self) -> BTreeSet<String> {
        self.store.get(store::FOLLOWED_SPEAKERS_KEY)
    }

    pub fn notified(&self) -> BTreeSet<String> {
        self.store.get(store::NOTIFIED_KEY)
    }

    /// Flip a session key's membership in the reminder set.
    /// Returns the resulting state (true = reminder now active).
    ///
    /// Removing a reminder also clears its notified entry, so a re-added
    /// reminder can legitimately fire again.
    pub fn toggle(&self, key: &str) -> bool {
        let mut reminders = self.reminders();

        let active = if reminders.remove(key) {
            self.clear_notified([key]);
            false
        } else {
            reminders.insert(key.to_string());
            true
        };

        self.store.set(store::REMINDERS_KEY, &reminders);
        self.emit_reminders_changed();
        active
    }

    pub fn is_reminded(&self, session: &Session, date: &str) -> bool {
        self.reminders().contains(&session_key(session, date))
    }

    pub fn is_followed(&self, speaker_id: &str) -> bool {
        self.followed().contains(speaker_id)
    }

    /// Follow a speaker: every session they currently appear in gains a
    /// reminder. Idempotent — keys already present are left alone.
    pub fn follow_speaker(&self, index: &ScheduleIndex, speaker_id: &str) {
        let mut followed = self.followed();
        followed.insert(speaker_id.to_string());
        self.store.set(store::FOLLOWED_SPEAKERS_KEY, &followed);

        let mut reminders = self.reminders();
        for (session, date) in index.find_sessions_by_speaker(speaker_id) {
            reminders.insert(session_key(session, date));
        }
        self.store.set(store::REMINDERS_KEY, &reminders);

        self.emit_followed_changed();
        self.emit_reminders_changed();
    }

    /// Unfollow a speaker: reminders for their sessions *in the current
    /// snapshot* are removed, notified entries included. No provenance is
    /// tracked, so a manually-added reminder that coincides with one of
    /// the speaker's sessions is removed too.
    pub fn unfollow_speaker(&self, index: &ScheduleIndex, speaker_id: &str) {
        let mut followed = self.followed();
        followed.remove(speaker_id);
        self.store.set(store::FOLLOWED_SPEAKERS_KEY, &followed);

        let speaker_keys: Vec<String> = index
            .find_sessions_by_speaker(speaker_id)
            .into_iter()
            .map(|(session, date)| session_key(session, date))
            .collect();

        let mut reminders = self.reminders();
        for key in &speaker_keys {
            reminders.remove(key);
        }
        self.store.set(store::REMINDERS_KEY, &reminders);
        self.clear_notified(speaker_keys.iter().map(String::as_str));

        self.emit_followed_changed();
        self.emit_reminders_changed();
    }

    // NOTIFIED SET (scheduler bookkeeping):

    pub fn is_notified(&self, key: &str) -> bool {
        self.notified().contains(key)
    }

    /// One-way {reminded} -> {notified} transition; terminal until the
    /// key leaves the reminder set.
    pub fn mark_notified(&self, key: &str) {
        let mut notified = self.notified();
        notified.insert(key.to_string());
        self.store.set(store::NOTIFIED_KEY, &notified);
    }

    fn clear_notified<'a>(&self, keys: impl IntoIterator<Item = &'a str>) {
        let mut notified = self.notified();
        let mut changed = false;
        for key in keys {
            changed |= notified.remove(key);
        }
        if changed {
            self.store.set(store::NOTIFIED_KEY, &notified);
        }
    }

    // GLOBAL OPT-OUT:

    pub fn is_muted(&self) -> bool {
        self.store.get(store::MUTED_KEY)
    }

    pub fn set_muted(&self, muted: bool) {
        self.store.set(store::MUTED_KEY, &muted);
    }

    fn emit_reminders_changed(&self) {
        if let Some(listener) = &self.listener {
            listener.reminders_changed();
        }
    }

    fn emit_followed_changed(&self) {
        if let Some(listener) = &self.listener {
            listener.followed_changed();
        }
    }
}
