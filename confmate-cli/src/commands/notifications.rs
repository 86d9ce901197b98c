use anyhow::Result;
use owo_colors::OwoColorize;

use super::load_snapshot;
use crate::render::render_announcement;
use confmate_core::announcement::sorted_for_display;
use confmate_core::config::CompanionConfig;
use confmate_core::inbox::Inbox;
use confmate_core::store::PrefStore;

pub fn run(config: &CompanionConfig, keep_unread: bool) -> Result<()> {
    let snapshot = load_snapshot(config);

    if snapshot.announcements.is_empty() {
        println!("{}", "No announcements yet.".dimmed());
        return Ok(());
    }

    let inbox = Inbox::new(PrefStore::new(config.state_dir()));
    let unread = inbox.unread_count(&snapshot.announcements);
    if unread > 0 {
        println!("{}", format!("{unread} unread").bold());
        println!();
    }

    let sorted = sorted_for_display(&snapshot.announcements);
    for (i, announcement) in sorted.iter().enumerate() {
        println!("{}", render_announcement(announcement));
        if i < sorted.len() - 1 {
            println!();
        }
    }

    // Viewing the list is what marks announcements read, mirroring the
    // navigation side effect of opening the notifications view.
    if !keep_unread {
        inbox.mark_read(&snapshot.announcements);
    }

    Ok(())
}
