use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deaddrop", version, about = "Store and read notes on a DeadDrop box — passwords never leave this machine")]
pub struct Cli {
    /// Server base URL (overrides the stored default for this invocation)
    #[arg(long, value_name = "URL", global = true)]
    pub server: Option<String>,

    /// Verify the server's TLS certificate (off by default — the box serves
    /// a self-signed cert)
    #[arg(long, global = true)]
    pub verify_tls: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes on the box (default when no command is given)
    List,
    /// Create a note, optionally sealed with a password
    Create(CreateArgs),
    /// Fetch a note; prompts for the password if it is encrypted
    Show(ShowArgs),
    /// Delete a note
    Delete(DeleteArgs),
    /// Show note count and storage usage
    Stats,
    /// Push this machine's clock to the box (it has no battery-backed RTC)
    Sync,
    /// Print or set the stored server URL
    Server(ServerArgs),
}

#[derive(Parser)]
pub struct CreateArgs {
    /// Note title (stored in the clear)
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Note body (reads stdin to EOF if omitted)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Seal the body with a password before upload (prompts twice)
    #[arg(long, short = 'e')]
    pub encrypt: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Note ID, as shown by `deaddrop list`
    #[arg(value_name = "ID")]
    pub id: String,

    /// Copy the (decrypted) body to the clipboard
    #[arg(long)]
    pub copy: bool,
}

#[derive(Parser)]
pub struct DeleteArgs {
    /// Note ID to delete
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Parser)]
pub struct ServerArgs {
    /// New server URL to store (prints the current one when omitted)
    #[arg(value_name = "URL")]
    pub url: Option<String>,
}
