//! `mazeforge` binary: reads `PORT` / `MAZE_TOPOLOGY` and serves the API.
//!
//! Log verbosity comes from `RUST_LOG` (default `info`).

use mazeforge::{MazeforgeError, MazeforgeServerBuilder, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), MazeforgeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let server = MazeforgeServerBuilder::from_config(config).build().await?;

    tracing::info!(addr = %server.local_addr()?, "Server running");
    server.run().await
}
