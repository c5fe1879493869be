//! demo-api service binary.
//!
//! # Configuration
//!
//! - `SERVER_HOST` - Listen address (default: 0.0.0.0)
//! - `SERVER_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use demo_api::{Config, Error, Server, api, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    logging::init_logging(&config.logging);

    info!(addr = %config.addr(), "starting demo-api");

    let server = Server::bind(config.addr()).await.map_err(|e| {
        error!(error = %e, addr = %config.addr(), "failed to bind");
        e
    })?;

    server.serve(api::router()).await;
    Ok(())
}
