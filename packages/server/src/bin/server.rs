//! Roomcast relay server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomcast-server
//! cargo run --bin roomcast-server -- --host 127.0.0.1 --port 3000 --public-dir ./public
//! ```

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use roomcast_server::{
    infrastructure::{dto::JsonFrameEncoder, repository::InMemoryRelayRepository},
    ui::{AppState, Server, ServerConfig},
};
use roomcast_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "roomcast-server")]
#[command(about = "Room-scoped WebSocket broadcast relay", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Directory of static files served for every other path
    #[arg(long, default_value = "./public")]
    public_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // 1. Repository（ルームと接続の共有状態、一つのロックで保護）
    let repository = Arc::new(InMemoryRelayRepository::new(
        Arc::new(SystemClock),
        Arc::new(JsonFrameEncoder),
    ));

    // 2. UseCases
    let state = Arc::new(AppState::new(repository));

    // 3. Server
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        public_dir: args.public_dir,
    };
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server failed to start: {}", e);
        std::process::exit(1);
    }
}
