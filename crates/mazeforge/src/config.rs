//! Process-level configuration.
//!
//! The binary reads two environment variables:
//!
//! - `PORT` — TCP port to listen on (all interfaces). Default `3003`.
//! - `MAZE_TOPOLOGY` — `random` (default) or `fixed`.

use mazeforge_maze::{MazeConfig, Topology};

use crate::MazeforgeError;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3003;

/// Everything needed to start a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind, e.g. `0.0.0.0:3003`.
    pub bind_addr: String,
    /// Settings for every session's maze.
    pub maze: MazeConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            maze: MazeConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the config from the process environment.
    ///
    /// # Errors
    /// Returns [`MazeforgeError::Config`] for an unparseable `PORT` and
    /// [`MazeforgeError::Maze`] for an unknown `MAZE_TOPOLOGY`.
    pub fn from_env() -> Result<Self, MazeforgeError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("MAZE_TOPOLOGY").ok().as_deref(),
        )
    }

    /// Builds the config from already-read variable values.
    ///
    /// Empty values count as unset.
    pub fn from_vars(
        port: Option<&str>,
        topology: Option<&str>,
    ) -> Result<Self, MazeforgeError> {
        let mut config = Self::default();

        if let Some(port) = port.filter(|p| !p.is_empty()) {
            let port: u16 = port.parse().map_err(|_| {
                MazeforgeError::Config(format!("PORT must be 0-65535, got {port:?}"))
            })?;
            config.bind_addr = format!("0.0.0.0:{port}");
        }

        if let Some(topology) = topology.filter(|t| !t.is_empty()) {
            config.maze.topology = topology.parse::<Topology>()?;
        }

        Ok(config)
    }
}
