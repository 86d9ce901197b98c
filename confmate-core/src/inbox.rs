//! Announcement read/unread and banner watermarks.
//!
//! Two independent high-water marks: the last announcement id seen in the
//! notifications view, and the last id whose high-priority banner was
//! dismissed. Both only ever advance.

use crate::announcement::{Announcement, Priority, max_id};
use crate::store::{self, PrefStore};

pub struct Inbox {
    store: PrefStore,
}

impl Inbox {
    pub fn new(store: PrefStore) -> Self {
        Inbox { store }
    }

    /// Announcements newer than the read watermark.
    pub fn unread_count(&self, announcements: &[Announcement]) -> usize {
        let last_read: i64 = self.store.get(store::NOTIF_READ_KEY);
        announcements.iter().filter(|a| a.id > last_read).count()
    }

    /// Advance the read watermark to the highest known id. An explicit
    /// navigation side effect (opening the notifications view), never
    /// automatic.
    pub fn mark_read(&self, announcements: &[Announcement]) {
        if announcements.is_empty() {
            return;
        }
        self.store.set(store::NOTIF_READ_KEY, &max_id(announcements));
    }

    /// The banner to show: highest-id high-priority announcement newer than
    /// the dismissed watermark, if any.
    pub fn active_banner<'a>(&self, announcements: &'a [Announcement]) -> Option<&'a Announcement> {
        let dismissed: i64 = self.store.get(store::BANNER_DISMISSED_KEY);
        announcements
            .iter()
            .filter(|a| a.priority == Priority::High && a.id > dismissed)
            .max_by_key(|a| a.id)
    }

    /// Advance the dismissed watermark to the overall max id, suppressing
    /// every currently-known high-priority banner — including ones that
    /// were never shown.
    pub fn dismiss_banner(&self, announcements: &[Announcement]) {
        if announcements.is_empty() {
            return;
        }
        self.store
            .set(store::BANNER_DISMISSED_KEY, &max_id(announcements));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(id: i64, priority: Priority) -> Announcement {
        Announcement {
            id,
            date: None,
            time: None,
            title: format!("a{id}"),
            message: String::new(),
            priority,
        }
    }

    fn temp_inbox() -> (tempfile::TempDir, Inbox) {
        let dir = tempfile::tempdir().unwrap();
        let inbox = Inbox::new(PrefStore::new(dir.path().to_path_buf()));
        (dir, inbox)
    }

    #[test]
    fn test_unread_count_against_watermark() {
        let (_dir, inbox) = temp_inbox();
        let items = vec![
            ann(1, Priority::Normal),
            ann(2, Priority::Normal),
            ann(3, Priority::Normal),
        ];

        assert_eq!(inbox.unread_count(&items), 3);
        inbox.mark_read(&items);
        assert_eq!(inbox.unread_count(&items), 0);

        let mut grown = items.clone();
        grown.push(ann(4, Priority::Normal));
        assert_eq!(inbox.unread_count(&grown), 1);
    }

    #[test]
    fn test_mark_read_on_empty_leaves_watermark() {
        let (_dir, inbox) = temp_inbox();
        inbox.mark_read(&[ann(5, Priority::Normal)]);
        // An empty snapshot must not reset anything.
        inbox.mark_read(&[]);
        assert_eq!(inbox.unread_count(&[ann(5, Priority::Normal)]), 0);
    }

    #[test]
    fn test_banner_picks_highest_high_priority() {
        let (_dir, inbox) = temp_inbox();
        let items = vec![
            ann(1, Priority::Normal),
            ann(2, Priority::High),
            ann(3, Priority::High),
        ];

        let banner = inbox.active_banner(&items).unwrap();
        assert_eq!(banner.id, 3);
    }

    #[test]
    fn test_dismiss_suppresses_unshown_banners_too() {
        let (_dir, inbox) = temp_inbox();
        let items = vec![
            ann(1, Priority::Normal),
            ann(2, Priority::High),
            ann(3, Priority::High),
        ];

        inbox.dismiss_banner(&items);
        // Id 2 was never shown, yet it is suppressed as well.
        assert!(inbox.active_banner(&items).is_none());
    }

    #[test]
    fn test_no_banner_without_high_priority() {
        let (_dir, inbox) = temp_inbox();
        assert!(inbox.active_banner(&[ann(1, Priority::Normal)]).is_none());
        assert!(inbox.active_banner(&[]).is_none());
    }
}
