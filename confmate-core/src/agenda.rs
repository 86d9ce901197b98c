//! Provider-neutral conference programme types.
//!
//! These types mirror the agenda feed contract: an ordered list of days,
//! each with its ordered sessions. Deserialization is lenient — optional
//! fields default so a sparse entry still loads.

use serde::{Deserialize, Serialize};

/// A scheduled conference session.
///
/// Sessions carry no stored id. Identity is the composite of the owning
/// day's date with `time` and `title` (see `schedule::session_key`), so the
/// title must stay stable across snapshots or reminders orphan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Start time, HH:MM wall clock
    pub time: String,
    /// End time, HH:MM wall clock
    pub end: String,
    pub title: String,
    #[serde(default)]
    pub room: String,
    /// Track tag (free-form, e.g. "mama", "neuro")
    #[serde(default)]
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,
    /// Ids of speakers appearing in this session
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speakers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One conference day with its ordered sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    /// Day number, unique within the programme
    pub day: u32,
    /// ISO date (YYYY-MM-DD); absent while the day is unscheduled.
    /// Dateless days render in listings but are invisible to every
    /// time computation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}
