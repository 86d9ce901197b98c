use anyhow::Result;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::client::FeedClient;
use confmate_core::config::CompanionConfig;
use confmate_core::feed::{AGENDA_FILE, ANNOUNCEMENTS_FILE, LOCATIONS_FILE, SPEAKERS_FILE};

pub async fn run(config: &CompanionConfig) -> Result<()> {
    let Some(feed_url) = &config.feed_url else {
        anyhow::bail!(
            "No feed URL configured.\n\n\
            Set one in {}:\n  \
            feed_url = \"https://example.org/conference\"",
            CompanionConfig::config_path()?.display()
        );
    };

    let client = FeedClient::new(feed_url);
    let dir = config.snapshot_dir();
    std::fs::create_dir_all(&dir)?;

    for file in [AGENDA_FILE, SPEAKERS_FILE, LOCATIONS_FILE, ANNOUNCEMENTS_FILE] {
        let spinner = create_spinner(format!("Fetching {file}"));
        let result = client.fetch(file).await;
        spinner.finish_and_clear();

        match result {
            Ok(body) => {
                // An error page must not clobber a good snapshot.
                if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                    println!(
                        "{} {file} {}",
                        "~".yellow(),
                        "(not JSON, keeping previous snapshot)".dimmed()
                    );
                    continue;
                }

                let temp = dir.join(format!("{file}.tmp"));
                std::fs::write(&temp, &body)?;
                std::fs::rename(&temp, dir.join(file))?;
                println!("{} {file}", "+".green());
            }
            Err(e) => {
                // Previous snapshot stays in place; nothing else to do.
                println!("{} {file} {}", "-".red(), e.to_string().red());
            }
        }
    }

    Ok(())
}
