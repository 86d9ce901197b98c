//! Feed snapshot consumption.
//!
//! The conference feed delivers full-replace JSON snapshots (no deltas):
//! one file each for the agenda, speakers, locations and announcements.
//! A missing or malformed file degrades to an empty collection with a
//! logged diagnostic — the engine never errors on bad feed data.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::agenda::Day;
use crate::announcement::Announcement;
use crate::location::Location;
use crate::speaker::Speaker;

pub const AGENDA_FILE: &str = "agenda.json";
pub const SPEAKERS_FILE: &str = "speakers.json";
pub const LOCATIONS_FILE: &str = "locations.json";
pub const ANNOUNCEMENTS_FILE: &str = "notifications.json";

/// Everything the feed currently says, parsed. Always complete: absent
/// pieces are empty, never missing.
#[derive(Default)]
pub struct Snapshot {
    pub days: Vec<Day>,
    pub speakers: Vec<Speaker>,
    pub locations: Vec<Location>,
    pub announcements: Vec<Announcement>,
}

impl Snapshot {
    /// Load every feed file from the snapshot directory.
    pub fn load(dir: &Path) -> Snapshot {
        Snapshot {
            days: read_feed_file(dir, AGENDA_FILE),
            speakers: read_feed_file(dir, SPEAKERS_FILE),
            locations: read_feed_file(dir, LOCATIONS_FILE),
            announcements: read_feed_file(dir, ANNOUNCEMENTS_FILE),
        }
    }
}

pub fn parse_days(json: &str) -> Vec<Day> {
    parse_collection(json, AGENDA_FILE)
}

pub fn parse_speakers(json: &str) -> Vec<Speaker> {
    parse_collection(json, SPEAKERS_FILE)
}

pub fn parse_locations(json: &str) -> Vec<Location> {
    parse_collection(json, LOCATIONS_FILE)
}

pub fn parse_announcements(json: &str) -> Vec<Announcement> {
    parse_collection(json, ANNOUNCEMENTS_FILE)
}

fn parse_collection<T: DeserializeOwned>(json: &str, what: &str) -> Vec<T> {
    match serde_json::from_str(json) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Ignoring malformed {what}: {e}");
            Vec::new()
        }
    }
}

fn read_feed_file<T: DeserializeOwned>(dir: &Path, file: &str) -> Vec<T> {
    let path = dir.join(file);
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_collection(&content, file),
        Err(_) => {
            log::debug!("No snapshot at {}", path.display());
            Vec::new()
        }
    }
}
