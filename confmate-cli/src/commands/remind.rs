use anyhow::Result;
use owo_colors::OwoColorize;

use super::open_registry;
use confmate_core::config::CompanionConfig;
use confmate_core::constants::LEAD_WINDOW_MINUTES;

pub fn run(config: &CompanionConfig, key: &str) -> Result<()> {
    // Shape check only — a typo'd key would otherwise become a reminder
    // that can never match a session.
    if key.splitn(3, '|').count() != 3 {
        anyhow::bail!(
            "Invalid session key '{}'. Expected \"date|HH:MM|title\" — \
            copy one from `confmate agenda --keys`.",
            key
        );
    }

    let registry = open_registry(config);
    if registry.toggle(key) {
        println!(
            "{} You'll be notified {} minutes before the session.",
            "🔔".yellow(),
            LEAD_WINDOW_MINUTES
        );
    } else {
        println!("Reminder removed.");
    }

    Ok(())
}
