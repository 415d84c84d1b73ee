//! Game sessions for Mazeforge.
//!
//! This crate handles everything that happens after a maze exists:
//!
//! 1. **Session tracking** — mapping opaque bearer tokens to games
//!    ([`SessionStore`])
//! 2. **Game state** — which maze a player is in and where
//!    ([`GameSession`])
//! 3. **Navigation** — resolving a requested direction against the
//!    current room ([`navigation`])
//!
//! # How it fits in the stack
//!
//! ```text
//! HTTP layer (above)  ← looks sessions up by bearer token
//!     ↕
//! Session layer (this crate)  ← owns every session's maze and position
//!     ↕
//! Maze layer (below)  ← builds the room graphs
//! ```

mod error;
pub mod navigation;
mod session;
mod store;

pub use error::SessionError;
pub use session::GameSession;
pub use store::{SessionStore, SharedSession};
