use anyhow::Result;
use owo_colors::OwoColorize;

use super::{load_snapshot, open_registry};
use confmate_core::config::CompanionConfig;
use confmate_core::schedule::ScheduleIndex;

pub fn run(config: &CompanionConfig, speaker_query: &str, follow: bool) -> Result<()> {
    let snapshot = load_snapshot(config);

    // Accept the stable id or an exact (case-insensitive) name.
    let speaker = snapshot
        .speakers
        .iter()
        .find(|s| s.id == speaker_query)
        .or_else(|| {
            snapshot
                .speakers
                .iter()
                .find(|s| s.name.eq_ignore_ascii_case(speaker_query))
        });

    let Some(speaker) = speaker else {
        anyhow::bail!("Speaker '{}' not found. See `confmate speakers`.", speaker_query);
    };
    let speaker_id = speaker.id.clone();
    let speaker_name = speaker.name.clone();

    let index = ScheduleIndex::new(snapshot.days);
    let registry = open_registry(config);

    if follow {
        registry.follow_speaker(&index, &speaker_id);
        let count = index.find_sessions_by_speaker(&speaker_id).len();
        println!(
            "Following {} ({} session {}).",
            speaker_name.bold(),
            count,
            if count == 1 { "reminder" } else { "reminders" }
        );
    } else {
        registry.unfollow_speaker(&index, &speaker_id);
        println!("Unfollowed {}.", speaker_name);
    }

    Ok(())
}
