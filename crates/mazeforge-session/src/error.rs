//! Error types for the session layer.

use mazeforge_protocol::RoomId;

/// Errors that can occur while looking up or playing a session.
///
/// `NotFound` and `InvalidMove` are the player's fault and leave the
/// session untouched. `CorruptGraph` means the server's own data is broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No session exists for the presented token.
    ///
    /// The token itself is deliberately left out of the message so it
    /// never ends up in logs.
    #[error("session not found")]
    NotFound,

    /// The current room has no path in the requested direction, or the
    /// direction isn't one of the four cardinal directions at all.
    #[error("invalid move: no path {direction:?} from here")]
    InvalidMove { direction: String },

    /// The session points at, or a path leads to, a room missing from the
    /// session's own maze.
    #[error("room {0} missing from session maze")]
    CorruptGraph(RoomId),
}
