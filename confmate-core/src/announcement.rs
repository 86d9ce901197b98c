//! Organizer announcements.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Announcement priority. High-priority entries are eligible for the
/// dismissible banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

/// An organizer announcement.
///
/// Ids are monotonically increasing integers assigned by the feed; the
/// read/unread and banner watermarks compare against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub priority: Priority,
}

impl Announcement {
    /// Timestamp used for display ordering. Missing or unparsable parts
    /// fall back to the epoch floor so undated entries sort last.
    pub fn display_stamp(&self) -> NaiveDateTime {
        let date = self
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .unwrap_or(NaiveDate::MIN);
        let time = self
            .time
            .as_deref()
            .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M").ok())
            .unwrap_or(NaiveTime::MIN);
        date.and_time(time)
    }
}

/// Announcements in display order: newest (date, time) first.
/// The feed guarantees no ordering, so callers sort here before rendering.
pub fn sorted_for_display(items: &[Announcement]) -> Vec<&Announcement> {
    let mut sorted: Vec<&Announcement> = items.iter().collect();
    sorted.sort_by(|a, b| b.display_stamp().cmp(&a.display_stamp()));
    sorted
}

/// Highest announcement id, 0 when empty. Watermarks advance to this.
pub fn max_id(items: &[Announcement]) -> i64 {
    items.iter().map(|a| a.id).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(id: i64, date: Option<&str>, time: Option<&str>) -> Announcement {
        Announcement {
            id,
            date: date.map(String::from),
            time: time.map(String::from),
            title: format!("a{id}"),
            message: String::new(),
            priority: Priority::Normal,
        }
    }

    #[test]
    fn test_display_order_newest_first() {
        let items = vec![
            ann(1, Some("2026-03-10"), Some("09:00")),
            ann(2, Some("2026-03-11"), Some("08:00")),
            ann(3, Some("2026-03-10"), Some("15:30")),
        ];
        let sorted = sorted_for_display(&items);
        let ids: Vec<i64> = sorted.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_undated_sorts_last() {
        let items = vec![ann(1, None, None), ann(2, Some("2026-03-10"), None)];
        let sorted = sorted_for_display(&items);
        assert_eq!(sorted[0].id, 2);
    }

    #[test]
    fn test_max_id_empty() {
        assert_eq!(max_id(&[]), 0);
    }

    #[test]
    fn test_priority_default_is_normal() {
        let a: Announcement =
            serde_json::from_str(r#"{"id":1,"title":"t","message":"m"}"#).unwrap();
        assert_eq!(a.priority, Priority::Normal);
    }
}
