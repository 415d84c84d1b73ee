//! Wire protocol for Mazeforge.
//!
//! This crate defines the "language" that clients and the maze server speak:
//!
//! - **Identity** ([`RoomId`], [`SessionToken`]) — opaque, high-entropy
//!   handles for rooms and game sessions.
//! - **Rooms** ([`Room`], [`Path`], [`Direction`], [`Effect`]) — the room
//!   graph as it travels on the wire.
//! - **Bodies** ([`StartGameResponse`], [`MoveRequest`], [`ErrorBody`]) —
//!   request and response payloads of the HTTP API.
//! - **Errors** ([`ProtocolError`]) — what can go wrong parsing wire values.
//!
//! # Architecture
//!
//! The protocol layer sits below everything else. It doesn't know about
//! sessions or HTTP; it only knows what the data looks like.
//!
//! ```text
//! HTTP (JSON) → Protocol (Room, Direction) → Session (navigation)
//! ```

mod body;
mod error;
mod room;
mod types;

pub use body::{ErrorBody, MoveRequest, StartGameResponse};
pub use error::ProtocolError;
pub use room::{Path, Room};
pub use types::{Direction, Effect, RoomId, SessionToken, DIRECTIONS};
