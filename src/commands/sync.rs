/// Sync command — pushes this machine's clock to the box.
use std::time::SystemTime;

use owo_colors::{OwoColorize, Stream::Stdout};

/// The appliance boots with its clock at the epoch and has no RTC battery,
/// so note timestamps are only meaningful after someone pushes a real time.
pub fn run_sync(cli: &crate::cli::Cli) -> anyhow::Result<()> {
    let client = super::client_for(cli)?;

    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("system clock error: {}", e))?
        .as_secs();

    client.sync_time(timestamp)?;

    println!(
        "{}",
        "Time synchronized.".if_supports_color(Stdout, |t| t.green())
    );

    Ok(())
}
