use anyhow::Result;
use owo_colors::OwoColorize;

use super::load_snapshot;
use crate::render::render_location;
use confmate_core::config::CompanionConfig;

pub fn run(config: &CompanionConfig, open_number: Option<usize>) -> Result<()> {
    let snapshot = load_snapshot(config);

    if snapshot.locations.is_empty() {
        println!("{}", "No locations yet.".dimmed());
        return Ok(());
    }

    if let Some(number) = open_number {
        let location = snapshot
            .locations
            .get(number.wrapping_sub(1))
            .ok_or_else(|| {
                anyhow::anyhow!("Location {} not found (1-{})", number, snapshot.locations.len())
            })?;

        let Some(url) = &location.maps_url else {
            anyhow::bail!("'{}' has no map link", location.name);
        };
        open::that(url)?;
        println!("Opened map for {}", location.name.bold());
        return Ok(());
    }

    for (i, location) in snapshot.locations.iter().enumerate() {
        println!("{}", render_location(i + 1, location));
        if i < snapshot.locations.len() - 1 {
            println!();
        }
    }

    Ok(())
}
