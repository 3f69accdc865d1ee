mod cli;
mod commands;
mod config;
mod crypto;
mod error;
mod note;
mod transport;
mod util;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Create(ref args)) => commands::create::run_create(&cli, args)?,
        Some(Commands::Show(ref args)) => commands::show::run_show(&cli, args)?,
        Some(Commands::Delete(ref args)) => commands::delete::run_delete(&cli, args)?,
        Some(Commands::Stats) => commands::stats::run_stats(&cli)?,
        Some(Commands::Sync) => commands::sync::run_sync(&cli)?,
        Some(Commands::Server(ref args)) => commands::server::run_server(args)?,
        Some(Commands::List) | None => commands::list::run_list(&cli)?,
    }

    Ok(())
}
