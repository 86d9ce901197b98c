use anyhow::Result;

use super::open_registry;
use confmate_core::config::CompanionConfig;

pub fn run(config: &CompanionConfig, mute: bool) -> Result<()> {
    let registry = open_registry(config);
    registry.set_muted(mute);

    if mute {
        println!("Reminder notifications muted on this device.");
    } else {
        println!("Reminder notifications enabled.");
    }

    Ok(())
}
