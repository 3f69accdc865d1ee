/// Server command — prints or sets the stored server URL.
use owo_colors::{OwoColorize, Stream::Stdout};

pub fn run_server(args: &crate::cli::ServerArgs) -> anyhow::Result<()> {
    match args.url {
        Some(ref url) => {
            crate::config::write_server(url)?;
            println!(
                "{} {}",
                "Server set to".if_supports_color(Stdout, |t| t.green()),
                url.trim()
            );
        }
        None => {
            let current = crate::config::read_server()?;
            let path = crate::config::server_path()?;
            println!("Server:      {}", current);
            println!("Config file: {}", path.display());
        }
    }

    Ok(())
}
