//! At-most-once reminder notification scheduling.
//!
//! A periodic tick walks the schedule and fires one notification per
//! reminded session inside a narrow trailing sub-window of the lead time.
//! The notified set guarantees at-most-once per key per device; a window
//! missed while the process was not running is silently skipped (no
//! catch-up).

use chrono::{Duration, NaiveDateTime};

use crate::constants::{FIRING_SPAN_MINUTES, LEAD_WINDOW_MINUTES};
use crate::error::CompanionResult;
use crate::reminders::ReminderRegistry;
use crate::schedule::{ScheduleIndex, session_key, session_stamp};

/// Icon reference passed along with every notification request.
pub const NOTIFICATION_ICON: &str = "appointment-soon";

/// A request for the platform to present one transient, dismissible popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    /// Two lines: session title, then "time - room".
    pub body: String,
    pub icon: String,
    /// Deduplication tag (the session key). The platform is expected to
    /// replace rather than stack presentations sharing a tag.
    pub tag: String,
}

/// Presentation seam. Implementations talk to the actual platform;
/// the engine never does.
pub trait Notifier {
    /// Whether the platform can present notifications at all. When this is
    /// false (permission refused, no notification daemon) the scheduler is
    /// inert — no retry loop, no user badgering.
    fn available(&self) -> bool;

    fn notify(&self, request: &NotificationRequest) -> CompanionResult<()>;
}

/// Matches active reminders against the schedule on every tick.
pub struct ReminderScheduler {
    lead: Duration,
    span: Duration,
    heading: String,
}

impl Default for ReminderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::with_lead_minutes(LEAD_WINDOW_MINUTES)
    }

    pub fn with_lead_minutes(minutes: i64) -> Self {
        ReminderScheduler {
            lead: Duration::minutes(minutes),
            span: Duration::minutes(FIRING_SPAN_MINUTES),
            heading: "Upcoming session".to_string(),
        }
    }

    /// Heading used as the popup title, e.g. "Oncology Days - Upcoming session".
    pub fn heading(mut self, heading: String) -> Self {
        self.heading = heading;
        self
    }

    /// Run one scheduling pass. Returns how many notifications fired.
    ///
    /// A session fires iff its reminder is active, it has not been notified
    /// before, and `start - now` falls in `(lead - span, lead]` — e.g. with
    /// the defaults, between 9 and 10 minutes before start. A session whose
    /// date or time does not parse is skipped; the pass continues with the
    /// rest.
    pub fn tick(
        &self,
        index: &ScheduleIndex,
        registry: &ReminderRegistry,
        now: NaiveDateTime,
        notifier: &dyn Notifier,
    ) -> usize {
        if !notifier.available() || registry.is_muted() {
            return 0;
        }

        let reminders = registry.reminders();
        if reminders.is_empty() {
            return 0;
        }
        let mut notified = registry.notified();

        let mut fired = 0;
        for (session, date) in index.sessions_with_dates() {
            let key = session_key(session, date);
            if !reminders.contains(&key) || notified.contains(&key) {
                continue;
            }

            let Some(start) = session_stamp(date, &session.time) else {
                continue;
            };

            let diff = start - now;
            if diff <= Duration::zero() || diff > self.lead || diff <= self.lead - self.span {
                continue;
            }

            let request = NotificationRequest {
                title: self.heading.clone(),
                body: format!("{}\n{} - {}", session.title, session.time, session.room),
                icon: NOTIFICATION_ICON.to_string(),
                tag: key.clone(),
            };

            match notifier.notify(&request) {
                Ok(()) => {
                    // Local set too, so a duplicate key later in the same
                    // pass cannot fire again.
                    notified.insert(key.clone());
                    registry.mark_notified(&key);
                    fired += 1;
                }
                Err(e) => {
                    // Key stays unmarked so a later tick inside the window
                    // may retry.
                    log::warn!("Could not present reminder for '{key}': {e}");
                }
            }
        }

        fired
    }
}
