use anyhow::Result;
use owo_colors::OwoColorize;

use super::{load_snapshot, open_registry};
use crate::render::render_speaker;
use confmate_core::config::CompanionConfig;

pub fn run(config: &CompanionConfig, area: Option<&str>) -> Result<()> {
    let snapshot = load_snapshot(config);

    let speakers: Vec<_> = snapshot
        .speakers
        .iter()
        .filter(|s| area.is_none_or(|a| s.area == a))
        .collect();

    if speakers.is_empty() {
        println!("{}", "No speakers found.".dimmed());
        return Ok(());
    }

    let registry = open_registry(config);
    for speaker in speakers {
        println!("{}", render_speaker(speaker, registry.is_followed(&speaker.id)));
    }

    Ok(())
}
