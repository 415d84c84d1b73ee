//! # Mazeforge
//!
//! A session-based text-adventure maze server.
//!
//! A client starts a game, gets back a bearer token and a start room, and
//! walks room to room with directional moves until it finds the room
//! tagged `Victory`. Each session owns a freshly generated maze.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mazeforge::prelude::*;
//!
//! # async fn run() -> Result<(), MazeforgeError> {
//! let server = MazeforgeServer::builder()
//!     .bind("0.0.0.0:3003")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```
//!
//! ## HTTP API
//!
//! | Route | Does |
//! |-------|------|
//! | `POST /Game/start` | new session → `{ token, startRoom }` |
//! | `GET /Room/current` | the session's current room |
//! | `PUT /Player/move` | `{ direction }` → the new current room |

mod config;
mod error;
mod handler;
mod server;

pub use config::ServerConfig;
pub use error::{ApiError, MazeforgeError};
pub use server::{MazeforgeServer, MazeforgeServerBuilder};

/// Everything needed to embed the server, in one import.
pub mod prelude {
    pub use crate::{
        ApiError, MazeforgeError, MazeforgeServer, MazeforgeServerBuilder,
        ServerConfig,
    };
    pub use mazeforge_maze::{Maze, MazeConfig, MazeError, MazeGenerator, Topology};
    pub use mazeforge_protocol::{
        Direction, Effect, Path, Room, RoomId, SessionToken, StartGameResponse,
    };
    pub use mazeforge_session::{GameSession, SessionError, SessionStore};
}
