use anyhow::Result;
use owo_colors::OwoColorize;

use super::{load_snapshot, now, open_registry};
use crate::render::render_session;
use confmate_core::config::CompanionConfig;
use confmate_core::schedule::{ScheduleIndex, is_session_now, session_stamp};

pub fn run(config: &CompanionConfig) -> Result<()> {
    let snapshot = load_snapshot(config);
    let index = ScheduleIndex::new(snapshot.days);
    let now = now();

    let Some((session, date)) = index.next_or_current_session(now) else {
        println!("{}", "No upcoming sessions.".dimmed());
        return Ok(());
    };

    let live = is_session_now(session, Some(date), now);
    let registry = open_registry(config);

    println!("{}", date.dimmed());
    println!("{}", render_session(session, live, registry.is_reminded(session, date)));

    if !live {
        if let Some(start) = session_stamp(date, &session.time) {
            if let Ok(until) = (start - now).to_std() {
                // Whole minutes; second-level churn is noise here.
                let until = std::time::Duration::from_secs(until.as_secs() / 60 * 60);
                println!("      starts in {}", humantime::format_duration(until));
            }
        }
    }

    Ok(())
}
