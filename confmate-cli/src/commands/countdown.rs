use anyhow::Result;
use owo_colors::OwoColorize;

use super::{load_snapshot, now};
use confmate_core::config::CompanionConfig;
use confmate_core::constants::TICK_INTERVAL_SECS;
use confmate_core::schedule::ScheduleIndex;

/// Display-only countdown to the event opening. With `--watch` it refreshes
/// on the same cadence as the reminder tick; plain invocation prints once.
pub async fn run(config: &CompanionConfig, watch: bool) -> Result<()> {
    loop {
        let snapshot = load_snapshot(config);
        let index = ScheduleIndex::new(snapshot.days);

        let Some(opening) = index.opening_time() else {
            println!("{}", "No programme yet. Run `confmate pull` first.".dimmed());
            return Ok(());
        };

        let now = now();
        if now >= opening {
            println!("The event is underway");
            return Ok(());
        }

        let until = (opening - now).to_std().unwrap_or_default();
        let until = std::time::Duration::from_secs(until.as_secs() / 60 * 60);
        println!("Opens in {}", humantime::format_duration(until).to_string().bold());

        if !watch {
            return Ok(());
        }
        tokio::time::sleep(std::time::Duration::from_secs(TICK_INTERVAL_SECS)).await;
    }
}
