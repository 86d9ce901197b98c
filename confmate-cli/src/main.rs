mod client;
mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use confmate_core::config::CompanionConfig;

#[derive(Parser)]
#[command(name = "confmate")]
#[command(about = "Browse the conference programme and manage session reminders")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the latest feed snapshot
    Pull,
    /// List a day's sessions
    Agenda {
        /// Day number (defaults to the first day)
        #[arg(short, long)]
        day: Option<u32>,

        /// Only show sessions in this area
        #[arg(short, long)]
        area: Option<String>,

        /// Print session keys for use with `confmate remind`
        #[arg(long)]
        keys: bool,
    },
    /// List speakers
    Speakers {
        /// Only show speakers in this area
        #[arg(short, long)]
        area: Option<String>,
    },
    /// Show venue locations
    Locations {
        /// Open this location's map in the browser (by list number)
        #[arg(long)]
        open: Option<usize>,
    },
    /// Show the current or next session
    Next,
    /// Time until the event opens
    Countdown {
        /// Keep refreshing every minute
        #[arg(long)]
        watch: bool,
    },
    /// Toggle a session reminder by key ("date|HH:MM|title")
    Remind { key: String },
    /// Follow a speaker (sets reminders for all their sessions)
    Follow { speaker: String },
    /// Unfollow a speaker (removes their derived reminders)
    Unfollow { speaker: String },
    /// List active reminders and followed speakers
    Reminders,
    /// List announcements (marks them read)
    Notifications {
        /// Leave the unread watermark untouched
        #[arg(long)]
        keep_unread: bool,
    },
    /// Show the current high-priority banner
    Banner {
        /// Dismiss all currently-known banners
        #[arg(long)]
        dismiss: bool,
    },
    /// Disable reminder notifications on this device
    Mute,
    /// Re-enable reminder notifications
    Unmute,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CompanionConfig::load()?;

    match cli.command {
        Commands::Pull => commands::pull::run(&config).await,
        Commands::Agenda { day, area, keys } => {
            commands::agenda::run(&config, day, area.as_deref(), keys)
        }
        Commands::Speakers { area } => commands::speakers::run(&config, area.as_deref()),
        Commands::Locations { open } => commands::locations::run(&config, open),
        Commands::Next => commands::next::run(&config),
        Commands::Countdown { watch } => commands::countdown::run(&config, watch).await,
        Commands::Remind { key } => commands::remind::run(&config, &key),
        Commands::Follow { speaker } => commands::follow::run(&config, &speaker, true),
        Commands::Unfollow { speaker } => commands::follow::run(&config, &speaker, false),
        Commands::Reminders => commands::reminders::run(&config),
        Commands::Notifications { keep_unread } => {
            commands::notifications::run(&config, keep_unread)
        }
        Commands::Banner { dismiss } => commands::banner::run(&config, dismiss),
        Commands::Mute => commands::mute::run(&config, true),
        Commands::Unmute => commands::mute::run(&config, false),
    }
}
