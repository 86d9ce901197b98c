//! Terminal rendering for confmate types.
//!
//! Plain-string builders with owo_colors; the commands print, these format.

use confmate_core::agenda::Session;
use confmate_core::announcement::{Announcement, Priority};
use confmate_core::location::Location;
use confmate_core::speaker::Speaker;
use owo_colors::OwoColorize;

/// One agenda entry: bell marker, time range, title, live badge, then a
/// dimmed detail line (room, area, moderator) when there is anything to say.
pub fn render_session(session: &Session, live: bool, reminded: bool) -> String {
    let bell = if reminded { "🔔" } else { "  " };
    let time = format!("{} - {}", session.time, session.end);

    let mut line = format!("{} {}  {}", bell, time.bold(), session.title);
    if live {
        line.push_str(&format!("  {}", "● LIVE".red()));
    }

    let mut details: Vec<String> = Vec::new();
    if !session.room.is_empty() {
        details.push(session.room.clone());
    }
    if !session.area.is_empty() {
        details.push(format!("[{}]", session.area));
    }
    if let Some(moderator) = &session.moderator {
        details.push(format!("moderated by {}", moderator));
    }
    if !details.is_empty() {
        line.push_str(&format!("\n      {}", details.join(" · ").dimmed()));
    }

    line
}

pub fn render_speaker(speaker: &Speaker, followed: bool) -> String {
    let marker = if followed { "🔔" } else { "  " };

    let mut line = format!("{} {} {}", marker, speaker.initials().dimmed(), speaker.name.bold());
    if speaker.is_claimed() {
        line.push_str(&format!(" {}", "(claimed)".dimmed()));
    }

    let mut details: Vec<String> = Vec::new();
    if !speaker.specialty.is_empty() {
        details.push(speaker.specialty.clone());
    }
    if !speaker.institution.is_empty() {
        details.push(speaker.institution.clone());
    }
    if !speaker.area.is_empty() {
        details.push(format!("[{}]", speaker.area));
    }
    if !details.is_empty() {
        line.push_str(&format!("\n      {}", details.join(" · ").dimmed()));
    }

    line
}

pub fn render_announcement(announcement: &Announcement) -> String {
    let mut meta: Vec<String> = Vec::new();
    if let Some(date) = &announcement.date {
        meta.push(date.clone());
    }
    if let Some(time) = &announcement.time {
        meta.push(time.clone());
    }

    let title = match announcement.priority {
        Priority::High => format!("{} {}", "!".red(), announcement.title.bold()),
        Priority::Normal => format!("  {}", announcement.title.bold()),
    };

    let mut lines = Vec::new();
    if !meta.is_empty() {
        lines.push(format!("  {}", meta.join(" · ").dimmed()));
    }
    lines.push(title);
    lines.push(format!("  {}", announcement.message));
    lines.join("\n")
}

pub fn render_location(number: usize, location: &Location) -> String {
    let mut line = format!("{}. {}", number, location.name.bold());
    if !location.kind.is_empty() {
        line.push_str(&format!("  {}", location.kind.dimmed()));
    }
    if !location.address.is_empty() {
        line.push_str(&format!("\n   {}", location.address));
    }
    if let Some(details) = &location.details {
        line.push_str(&format!("\n   {}", details.dimmed()));
    }
    if let Some(url) = &location.maps_url {
        line.push_str(&format!("\n   {}", url.dimmed()));
    }
    line
}
