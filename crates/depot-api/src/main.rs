//! Depot API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p depot-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use depot_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so DEBUG can pick the log format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_debug(config.app.debug)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        debug = config.app.debug,
        address = %config.server.address(),
        "Configuration loaded"
    );

    if let Err(e) = depot_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
