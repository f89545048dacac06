//! Chat room server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomly-server -- --port 5000 --participant-ttl-secs 10
//! ```

use clap::Parser;
use roomly_server::ServerConfig;
use roomly_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = roomly_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
