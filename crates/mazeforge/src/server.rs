//! `MazeforgeServer` builder and server loop.
//!
//! This is the entry point for running a maze server. It ties the layers
//! together: HTTP → session store → maze generator.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use mazeforge_maze::{MazeConfig, MazeGenerator};
use mazeforge_session::SessionStore;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::{MazeforgeError, ServerConfig};

/// Shared server state passed to every request handler.
///
/// Wrapped in `Arc` so it can be cheaply cloned into each request.
/// The session store synchronizes itself; the generator is read-only.
pub(crate) struct ServerState {
    pub(crate) sessions: SessionStore,
    pub(crate) generator: MazeGenerator,
}

/// Builds the HTTP routes over the given state.
pub(crate) fn router(state: Arc<ServerState>) -> Router {
    with_layers(routes()).with_state(state)
}

fn routes() -> Router<Arc<ServerState>> {
    Router::new()
        .route("/Game/start", post(handler::start_game))
        .route("/Room/current", get(handler::current_room))
        .route("/Player/move", put(handler::move_player))
}

/// Panic recovery and request tracing, applied to every route.
fn with_layers(routes: Router<Arc<ServerState>>) -> Router<Arc<ServerState>> {
    routes
        .layer(CatchPanicLayer::custom(handler::handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Builder for configuring and starting a Mazeforge server.
///
/// # Example
///
/// ```rust,ignore
/// use mazeforge::prelude::*;
///
/// let server = MazeforgeServer::builder()
///     .bind("0.0.0.0:3003")
///     .maze_config(MazeConfig { topology: Topology::Fixed, ..Default::default() })
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct MazeforgeServerBuilder {
    bind_addr: String,
    maze_config: MazeConfig,
}

impl MazeforgeServerBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default bind address is loopback only (`127.0.0.1:3003`). The
    /// binary goes through [`ServerConfig`], which binds all interfaces
    /// (`0.0.0.0:PORT`).
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:3003".to_string(),
            maze_config: MazeConfig::default(),
        }
    }

    /// Creates a builder from a full [`ServerConfig`].
    pub fn from_config(config: ServerConfig) -> Self {
        Self {
            bind_addr: config.bind_addr,
            maze_config: config.maze,
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the maze generator configuration.
    pub fn maze_config(mut self, config: MazeConfig) -> Self {
        self.maze_config = config;
        self
    }

    /// Validates the config, binds the listener, and creates an empty
    /// session store.
    ///
    /// # Errors
    /// - [`MazeforgeError::Maze`] — the maze config is invalid
    /// - [`MazeforgeError::Io`] — the address couldn't be bound
    pub async fn build(self) -> Result<MazeforgeServer, MazeforgeError> {
        let generator = MazeGenerator::new(self.maze_config)?;
        let listener = TcpListener::bind(&self.bind_addr).await?;

        tracing::info!(
            addr = %self.bind_addr,
            topology = %generator.config().topology,
            "HTTP listener bound"
        );

        let state = Arc::new(ServerState {
            sessions: SessionStore::new(),
            generator,
        });

        Ok(MazeforgeServer { listener, state })
    }
}

impl Default for MazeforgeServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Mazeforge server.
///
/// Call [`run()`](Self::run) to start serving requests.
pub struct MazeforgeServer {
    listener: TcpListener,
    state: Arc<ServerState>,
}

impl MazeforgeServer {
    /// Creates a new builder.
    pub fn builder() -> MazeforgeServerBuilder {
        MazeforgeServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until the process is terminated.
    ///
    /// Each request runs as its own Tokio task.
    pub async fn run(self) -> Result<(), MazeforgeError> {
        tracing::info!("Mazeforge server running");
        axum::serve(self.listener, router(self.state)).await?;
        Ok(())
    }
}
