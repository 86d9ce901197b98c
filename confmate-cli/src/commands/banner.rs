use anyhow::Result;
use owo_colors::OwoColorize;

use super::load_snapshot;
use confmate_core::config::CompanionConfig;
use confmate_core::inbox::Inbox;
use confmate_core::store::PrefStore;

pub fn run(config: &CompanionConfig, dismiss: bool) -> Result<()> {
    let snapshot = load_snapshot(config);
    let inbox = Inbox::new(PrefStore::new(config.state_dir()));

    let Some(banner) = inbox.active_banner(&snapshot.announcements) else {
        println!("{}", "No active banner.".dimmed());
        return Ok(());
    };

    println!(
        "{}",
        format!("{}: {}", banner.title, banner.message).yellow().bold()
    );

    if dismiss {
        inbox.dismiss_banner(&snapshot.announcements);
        println!("{}", "Dismissed.".dimmed());
    }

    Ok(())
}
