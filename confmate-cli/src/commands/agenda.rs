use anyhow::Result;
use owo_colors::OwoColorize;

use super::{load_snapshot, now, open_registry};
use crate::render::render_session;
use confmate_core::config::CompanionConfig;
use confmate_core::schedule::{ScheduleIndex, is_session_now, session_key};

pub fn run(
    config: &CompanionConfig,
    day: Option<u32>,
    area: Option<&str>,
    keys: bool,
) -> Result<()> {
    let snapshot = load_snapshot(config);
    let index = ScheduleIndex::new(snapshot.days);

    if index.is_empty() {
        println!("{}", "No programme yet. Run `confmate pull` first.".dimmed());
        return Ok(());
    }

    let day_data = match day {
        Some(n) => index.day(n).ok_or_else(|| {
            let available: Vec<String> =
                index.days().iter().map(|d| d.day.to_string()).collect();
            anyhow::anyhow!("Day {} not found. Available: {}", n, available.join(", "))
        })?,
        None => &index.days()[0],
    };

    let header = match &day_data.date {
        Some(date) => format!("Day {} · {}", day_data.day, date),
        None => format!("Day {}", day_data.day),
    };
    println!("{}", header.bold());

    let sessions: Vec<_> = day_data
        .sessions
        .iter()
        .filter(|s| area.is_none_or(|a| s.area == a))
        .collect();

    if sessions.is_empty() {
        println!("   {}", "No sessions scheduled.".dimmed());
        return Ok(());
    }

    let registry = open_registry(config);
    let now = now();
    let date = day_data.date.as_deref();

    for session in sessions {
        let live = is_session_now(session, date, now);
        let reminded = date.is_some_and(|d| registry.is_reminded(session, d));
        println!("{}", render_session(session, live, reminded));

        if keys {
            if let Some(d) = date {
                println!("      {}", session_key(session, d).dimmed());
            }
        }
    }

    Ok(())
}
