pub mod create;
pub mod delete;
pub mod list;
pub mod server;
pub mod show;
pub mod stats;
pub mod sync;

use crate::transport::ServerClient;

/// Build a client for the resolved server: the `--server` flag wins over the
/// stored config, which falls back to the appliance's AP address.
pub fn client_for(cli: &crate::cli::Cli) -> anyhow::Result<ServerClient> {
    let url = match cli.server {
        Some(ref url) => url.clone(),
        None => crate::config::read_server()?,
    };
    ServerClient::new(&url, cli.verify_tls)
}
