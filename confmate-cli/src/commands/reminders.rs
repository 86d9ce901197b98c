use anyhow::Result;
use owo_colors::OwoColorize;

use super::open_registry;
use confmate_core::config::CompanionConfig;

pub fn run(config: &CompanionConfig) -> Result<()> {
    let registry = open_registry(config);

    if registry.is_muted() {
        println!("{}", "Notifications are muted on this device.".yellow());
    }

    let reminders = registry.reminders();
    if reminders.is_empty() {
        println!(
            "{}",
            "No reminders. Toggle one with `confmate remind <key>`.".dimmed()
        );
    } else {
        let notified = registry.notified();
        for key in &reminders {
            let marker = if notified.contains(key) {
                "✓".green().to_string()
            } else {
                "•".to_string()
            };
            println!(" {} {}", marker, key);
        }
    }

    let followed = registry.followed();
    if !followed.is_empty() {
        let names: Vec<&str> = followed.iter().map(String::as_str).collect();
        println!();
        println!("Following: {}", names.join(", "));
    }

    Ok(())
}
