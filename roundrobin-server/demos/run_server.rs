//! Example to run the round-robin server standalone
//!
//! Run with: cargo run -p roundrobin-server --example run_server

use roundrobin_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        port: 8000,
        ..Default::default()
    };

    println!("Starting round-robin server on port {}", config.port);
    println!("Try: curl -X POST http://localhost:{}/add_player/alice", config.port);

    run_server(config).await
}
