pub mod agenda;
pub mod banner;
pub mod countdown;
pub mod follow;
pub mod locations;
pub mod mute;
pub mod next;
pub mod notifications;
pub mod pull;
pub mod remind;
pub mod reminders;
pub mod speakers;

use chrono::NaiveDateTime;
use confmate_core::config::CompanionConfig;
use confmate_core::feed::Snapshot;
use confmate_core::reminders::ReminderRegistry;
use confmate_core::store::PrefStore;
use indicatif::{ProgressBar, ProgressStyle};

/// Load the current snapshot off disk (empty until the first `pull`).
pub fn load_snapshot(config: &CompanionConfig) -> Snapshot {
    Snapshot::load(&config.snapshot_dir())
}

pub fn open_registry(config: &CompanionConfig) -> ReminderRegistry {
    ReminderRegistry::new(PrefStore::new(config.state_dir()))
}

/// Local wall-clock now, matching the zone-less programme times.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
