//! The fixed demo maze.
//!
//! A small hand-authored map that branches, unlike the random chain:
//!
//! ```text
//!              [Victory]
//!                  │ N/S
//!   [Start] ─N/S─ [Hub] ─E/W─ [Dead end]
//! ```
//!
//! The ids are stable, so clients and docs can refer to them directly.

use mazeforge_protocol::{Direction, Effect, Room, RoomId};

use crate::{Maze, MazeError};

/// Id of the demo maze's start room.
pub const DEMO_START: &str = "572c5e10-564a-43e6-a489-e12dfe94d57c";
/// Id of the hub room every other demo room connects to.
pub const DEMO_HUB: &str = "0af61e6b-5ba4-4992-a6ad-bd209818190e";
/// Id of the demo maze's victory room.
pub const DEMO_VICTORY: &str = "a9d03b2c-5f92-49e0-ba9b-eed09d56f94e";
/// Id of the dead-end branch off the hub.
pub const DEMO_DEAD_END: &str = "12ef2e75-b9a9-4f95-8769-144d814638ab";

/// Builds a fresh copy of the demo maze with every room on `floor`.
///
/// # Errors
/// Never fails for the built-in layout; the `Result` comes from
/// [`Maze::from_rooms`] validation.
pub fn demo_maze(floor: &str) -> Result<Maze, MazeError> {
    let start = RoomId::new(DEMO_START);
    let hub = RoomId::new(DEMO_HUB);
    let victory = RoomId::new(DEMO_VICTORY);
    let dead_end = RoomId::new(DEMO_DEAD_END);

    let rooms = vec![
        Room::new(start.clone(), floor)
            .with_effect(Effect::Start)
            .with_path(Direction::North, hub.clone()),
        Room::new(hub.clone(), floor)
            .with_path(Direction::South, start.clone())
            .with_path(Direction::North, victory.clone())
            .with_path(Direction::East, dead_end.clone()),
        Room::new(victory, floor)
            .with_effect(Effect::Victory)
            .with_path(Direction::South, hub.clone()),
        Room::new(dead_end, floor).with_path(Direction::West, hub),
    ];

    Maze::from_rooms(rooms, start)
}
