//! Queryable index over the agenda snapshot.
//!
//! All time comparisons use naive local wall-clock (the programme's dates
//! and HH:MM times carry no zone). `now` is always an explicit parameter;
//! the engine never reads a clock itself.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::agenda::{Day, Session};
use crate::constants::OPENING_HOUR;

/// Composite identity for a session: `date|time|title`.
///
/// This is the sole key used for reminder matching and notification
/// deduplication. Two sessions sharing date, start time and title are
/// indistinguishable by design.
pub fn session_key(session: &Session, date: &str) -> String {
    format!("{}|{}|{}", date, session.time, session.title)
}

/// Combine an ISO date with an HH:MM wall-clock time.
/// None when either part does not parse.
pub fn session_stamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(date.and_time(time))
}

/// True iff `now` falls inside the session's [start, end] window, inclusive.
/// A missing date or an unparsable timestamp means false, never an error.
pub fn is_session_now(session: &Session, date: Option<&str>, now: NaiveDateTime) -> bool {
    let Some(date) = date else { return false };
    match (
        session_stamp(date, &session.time),
        session_stamp(date, &session.end),
    ) {
        (Some(start), Some(end)) => start <= now && now <= end,
        _ => false,
    }
}

/// Queryable view over the full-replace agenda snapshot.
pub struct ScheduleIndex {
    days: Vec<Day>,
}

impl ScheduleIndex {
    pub fn new(days: Vec<Day>) -> Self {
        ScheduleIndex { days }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, number: u32) -> Option<&Day> {
        self.days.iter().find(|d| d.day == number)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Every session paired with its day's date, in programme order.
    /// Dateless days are skipped.
    pub fn sessions_with_dates(&self) -> impl Iterator<Item = (&Session, &str)> {
        self.days
            .iter()
            .filter_map(|day| day.date.as_deref().map(|date| (day, date)))
            .flat_map(|(day, date)| day.sessions.iter().map(move |s| (s, date)))
    }

    /// Linear scan for every session the speaker appears in.
    pub fn find_sessions_by_speaker(&self, speaker_id: &str) -> Vec<(&Session, &str)> {
        self.sessions_with_dates()
            .filter(|(session, _)| session.speakers.iter().any(|s| s == speaker_id))
            .collect()
    }

    /// The session happening right now, or failing that the one with the
    /// soonest future start. An in-progress session wins immediately; ties
    /// on future starts go to the first in programme order (strict `<`).
    /// Sessions with unparsable times are skipped.
    pub fn next_or_current_session(&self, now: NaiveDateTime) -> Option<(&Session, &str)> {
        let mut next: Option<(&Session, &str, NaiveDateTime)> = None;

        for (session, date) in self.sessions_with_dates() {
            let Some(start) = session_stamp(date, &session.time) else {
                continue;
            };
            let Some(end) = session_stamp(date, &session.end) else {
                continue;
            };

            if start <= now && now <= end {
                return Some((session, date));
            }

            if start > now && next.as_ref().is_none_or(|(_, _, best)| start < *best) {
                next = Some((session, date, start));
            }
        }

        next.map(|(session, date, _)| (session, date))
    }

    /// When the event opens: the first day's date at the opening hour.
    /// Anchor for the pre-event countdown.
    pub fn opening_time(&self) -> Option<NaiveDateTime> {
        let date = self.days.first()?.date.as_deref()?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
        date.and_hms_opt(OPENING_HOUR, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(time: &str, end: &str, title: &str) -> Session {
        Session {
            time: time.to_string(),
            end: end.to_string(),
            title: title.to_string(),
            room: "Sala A".to_string(),
            area: "neuro".to_string(),
            moderator: None,
            speakers: vec![],
            description: None,
        }
    }

    fn day(number: u32, date: Option<&str>, sessions: Vec<Session>) -> Day {
        Day {
            day: number,
            date: date.map(String::from),
            sessions,
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        session_stamp(date, time).unwrap()
    }

    #[test]
    fn test_session_key_is_stable() {
        let s = session("09:00", "10:00", "Keynote");
        let first = session_key(&s, "2026-03-10");
        assert_eq!(first, "2026-03-10|09:00|Keynote");
        assert_eq!(session_key(&s, "2026-03-10"), first);
    }

    #[test]
    fn test_is_session_now_inside_window() {
        let s = session("09:00", "10:00", "Keynote");
        assert!(is_session_now(&s, Some("2026-03-10"), at("2026-03-10", "09:30")));
    }

    #[test]
    fn test_is_session_now_bounds_inclusive() {
        let s = session("09:00", "10:00", "Keynote");
        assert!(is_session_now(&s, Some("2026-03-10"), at("2026-03-10", "09:00")));
        assert!(is_session_now(&s, Some("2026-03-10"), at("2026-03-10", "10:00")));
        assert!(!is_session_now(&s, Some("2026-03-10"), at("2026-03-10", "10:01")));
    }

    #[test]
    fn test_is_session_now_missing_date_or_bad_time() {
        let s = session("09:00", "10:00", "Keynote");
        assert!(!is_session_now(&s, None, at("2026-03-10", "09:30")));

        let broken = session("9am", "10:00", "Keynote");
        assert!(!is_session_now(&broken, Some("2026-03-10"), at("2026-03-10", "09:30")));
    }

    #[test]
    fn test_next_or_current_prefers_in_progress() {
        let index = ScheduleIndex::new(vec![day(
            1,
            Some("2026-03-10"),
            vec![
                session("09:00", "10:00", "Keynote"),
                session("10:15", "11:00", "Panel"),
            ],
        )]);

        let (current, _) = index
            .next_or_current_session(at("2026-03-10", "09:30"))
            .unwrap();
        assert_eq!(current.title, "Keynote");
    }

    #[test]
    fn test_next_or_current_picks_soonest_future() {
        let index = ScheduleIndex::new(vec![
            day(1, Some("2026-03-10"), vec![session("09:00", "10:00", "Keynote")]),
            day(2, Some("2026-03-11"), vec![session("09:00", "10:00", "Closing")]),
        ]);

        let (next, date) = index
            .next_or_current_session(at("2026-03-10", "12:00"))
            .unwrap();
        assert_eq!(next.title, "Closing");
        assert_eq!(date, "2026-03-11");
    }

    #[test]
    fn test_next_or_current_tie_goes_to_first_listed() {
        let index = ScheduleIndex::new(vec![day(
            1,
            Some("2026-03-10"),
            vec![
                session("14:00", "15:00", "Track A"),
                session("14:00", "15:00", "Track B"),
            ],
        )]);

        let (next, _) = index
            .next_or_current_session(at("2026-03-10", "08:00"))
            .unwrap();
        assert_eq!(next.title, "Track A");
    }

    #[test]
    fn test_next_or_current_none_when_programme_over() {
        let index = ScheduleIndex::new(vec![day(
            1,
            Some("2026-03-10"),
            vec![session("09:00", "10:00", "Keynote")],
        )]);

        assert!(index.next_or_current_session(at("2026-03-12", "09:00")).is_none());
        assert!(ScheduleIndex::new(vec![]).next_or_current_session(at("2026-03-10", "09:00")).is_none());
    }

    #[test]
    fn test_malformed_session_skipped_not_fatal() {
        let index = ScheduleIndex::new(vec![day(
            1,
            Some("2026-03-10"),
            vec![
                session("bogus", "10:00", "Broken"),
                session("11:00", "12:00", "Fine"),
            ],
        )]);

        let (next, _) = index
            .next_or_current_session(at("2026-03-10", "08:00"))
            .unwrap();
        assert_eq!(next.title, "Fine");
    }

    #[test]
    fn test_find_sessions_by_speaker() {
        let mut with_speaker = session("09:00", "10:00", "Keynote");
        with_speaker.speakers = vec!["sp1".to_string(), "sp2".to_string()];
        let index = ScheduleIndex::new(vec![day(
            1,
            Some("2026-03-10"),
            vec![with_speaker, session("10:15", "11:00", "Panel")],
        )]);

        let found = index.find_sessions_by_speaker("sp1");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0.title, "Keynote");
        assert!(index.find_sessions_by_speaker("sp9").is_empty());
    }

    #[test]
    fn test_opening_time_uses_first_day() {
        let index = ScheduleIndex::new(vec![
            day(1, Some("2026-03-10"), vec![]),
            day(2, Some("2026-03-11"), vec![]),
        ]);
        assert_eq!(index.opening_time(), Some(at("2026-03-10", "08:00")));

        let dateless = ScheduleIndex::new(vec![day(1, None, vec![])]);
        assert!(dateless.opening_time().is_none());
    }
}
