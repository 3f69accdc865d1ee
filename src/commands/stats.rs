/// Stats command — note count and flash usage of the box.
use crate::util::human_kb;

pub fn run_stats(cli: &crate::cli::Cli) -> anyhow::Result<()> {
    let client = super::client_for(cli)?;
    let stats = client.stats()?;

    let plural = if stats.count == 1 { "" } else { "s" };
    println!("Notes:   {} note{}", stats.count, plural);
    println!(
        "Storage: {} / {} used",
        human_kb(stats.used),
        human_kb(stats.total)
    );

    Ok(())
}
