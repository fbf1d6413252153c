use tracing::info;

use uniplex::config::Config;
use uniplex::server::{listener, mux};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let socket = listener::bind(cfg.listen_addr, listener::BACKLOG)?;
    info!("Listening on http://{}", cfg.listen_addr);

    let mut server = mux::Server::new(socket)?;
    server.run()
}
