//! Desktop notification service for confmate reminders.
//!
//! Reloads the feed snapshot on every tick so schedule changes land
//! without a restart, runs one scheduling pass, then sleeps. The engine's
//! notified set makes restarts safe: a session already notified on this
//! device never fires twice.

use clap::Parser;
use log::{debug, info};

use confmate_core::config::CompanionConfig;
use confmate_core::constants::{LEAD_WINDOW_MINUTES, TICK_INTERVAL_SECS};
use confmate_core::error::{CompanionError, CompanionResult};
use confmate_core::feed::Snapshot;
use confmate_core::reminders::ReminderRegistry;
use confmate_core::schedule::ScheduleIndex;
use confmate_core::scheduler::{NotificationRequest, Notifier, ReminderScheduler};
use confmate_core::store::PrefStore;

#[derive(Parser)]
#[command(name = "confmate-notify")]
#[command(about = "Fires desktop notifications for reminded sessions")]
struct Cli {
    /// Minutes of lead time before a session starts
    #[arg(long, default_value_t = LEAD_WINDOW_MINUTES)]
    lead: i64,

    /// Run a single scheduling pass and exit (for cron-style setups)
    #[arg(long)]
    once: bool,
}

/// Presents reminders through the desktop notification daemon.
struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn available(&self) -> bool {
        // The capability probe doubles as the permission check: when no
        // daemon answers, the scheduler stays inert instead of erroring
        // on every tick.
        notify_rust::get_capabilities().is_ok()
    }

    fn notify(&self, request: &NotificationRequest) -> CompanionResult<()> {
        notify_rust::Notification::new()
            .summary(&request.title)
            .body(&request.body)
            .icon(&request.icon)
            .hint(notify_rust::Hint::Custom(
                "x-dunst-stack-tag".to_string(),
                request.tag.clone(),
            ))
            .show()
            .map(|_| ())
            .map_err(|e| CompanionError::Notify(e.to_string()))
    }
}

fn main() -> CompanionResult<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CompanionConfig::load()?;

    let mut scheduler = ReminderScheduler::with_lead_minutes(cli.lead);
    if let Some(event) = &config.event_name {
        scheduler = scheduler.heading(format!("{event} - Upcoming session"));
    }

    let notifier = DesktopNotifier;
    let registry = ReminderRegistry::new(PrefStore::new(config.state_dir()));

    info!("confmate-notify started (lead {} min)", cli.lead);

    loop {
        // Snapshot before scheduling: the index the tick sees is always
        // at least as fresh as the files on disk.
        let snapshot = Snapshot::load(&config.snapshot_dir());
        let index = ScheduleIndex::new(snapshot.days);
        let now = chrono::Local::now().naive_local();

        let fired = scheduler.tick(&index, &registry, now, &notifier);
        if fired > 0 {
            info!("fired {fired} notification(s)");
        } else {
            debug!("tick: nothing to fire");
        }

        if cli.once {
            break;
        }
        std::thread::sleep(std::time::Duration::from_secs(TICK_INTERVAL_SECS));
    }

    Ok(())
}
