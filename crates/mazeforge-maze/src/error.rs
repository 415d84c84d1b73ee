//! Error types for the maze layer.

use mazeforge_protocol::RoomId;

/// Errors raised while configuring, building, or validating a maze.
///
/// Every variant except `InvalidConfig` describes a broken room graph.
/// The generators in this crate never produce one, so seeing them at
/// runtime means a hand-built maze is wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// The generator settings can't produce a valid maze
    /// (e.g. fewer than two rooms, or `min_rooms > max_rooms`).
    #[error("invalid maze config: {0}")]
    InvalidConfig(String),

    /// Two rooms share an id.
    #[error("duplicate room id {0}")]
    DuplicateRoom(RoomId),

    /// A room is stored under a key that isn't its own id.
    #[error("room {actual} stored under key {key}")]
    KeyMismatch { key: RoomId, actual: RoomId },

    /// A path points at a room that isn't in the maze.
    #[error("path from {from} leads to unknown room {to}")]
    DanglingPath { from: RoomId, to: RoomId },

    /// No room carries the `Start` effect.
    #[error("maze has no start room")]
    MissingStart,

    /// More than one room carries the `Start` effect.
    #[error("maze has {0} start rooms")]
    MultipleStarts(usize),

    /// The maze's start id doesn't point at the `Start` room.
    #[error("start id {0} is not the room tagged Start")]
    StartMismatch(RoomId),

    /// No room carries the `Victory` effect.
    #[error("maze has no victory room")]
    MissingVictory,

    /// More than one room carries the `Victory` effect.
    #[error("maze has {0} victory rooms")]
    MultipleVictories(usize),

    /// A room can't be reached from the start room.
    #[error("room {0} is unreachable from the start")]
    Unreachable(RoomId),
}
