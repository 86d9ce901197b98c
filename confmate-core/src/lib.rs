//! Core engine for the confmate ecosystem.
//!
//! This crate provides the data and reminder engine shared by the confmate
//! binaries:
//! - feed types and snapshot parsing (`agenda`, `speaker`, `location`,
//!   `announcement`, `feed`)
//! - the queryable `schedule` index
//! - persisted device-local state (`store`, `reminders`)
//! - the notification `scheduler` and the announcement `inbox` watermarks
//!
//! The engine itself never reads a clock, touches the network, or talks to
//! a notification platform: `now` is a parameter, snapshots come off disk,
//! and presentation goes through the `scheduler::Notifier` seam.

pub mod agenda;
pub mod announcement;
pub mod config;
pub mod constants;
pub mod error;
pub mod feed;
pub mod inbox;
pub mod location;
pub mod reminders;
pub mod schedule;
pub mod scheduler;
pub mod speaker;
pub mod store;

// Re-export the types most callers need at crate root for convenience
pub use agenda::{Day, Session};
pub use announcement::{Announcement, Priority};
pub use config::CompanionConfig;
pub use error::{CompanionError, CompanionResult};
pub use feed::Snapshot;
pub use inbox::Inbox;
pub use location::Location;
pub use reminders::{ChangeListener, ReminderRegistry};
pub use schedule::{ScheduleIndex, is_session_now, session_key};
pub use scheduler::{NotificationRequest, Notifier, ReminderScheduler};
pub use speaker::Speaker;
pub use store::PrefStore;
