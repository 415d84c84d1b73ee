//! A single player's game: their own maze and where they're standing.
//!
//! The session is a tiny state machine:
//!
//! ```text
//!   states      = rooms of the maze
//!   initial     = the maze's start room
//!   transitions = paths, one per successful move
//! ```
//!
//! There is no terminal state. Standing in the `Victory` room is just a
//! flag in the room payload; the player may keep walking.

use mazeforge_maze::Maze;
use mazeforge_protocol::{Room, RoomId};

use crate::{SessionError, navigation};

/// One game in progress.
///
/// The session owns its maze outright. No other session can see or
/// change it, even when two mazes happen to share room ids.
#[derive(Debug, Clone)]
pub struct GameSession {
    maze: Maze,
    current: RoomId,
}

impl GameSession {
    /// Starts a new game at the maze's start room.
    pub fn new(maze: Maze) -> Self {
        let current = maze.start().clone();
        Self { maze, current }
    }

    /// The maze this session plays in.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Id of the room the player is in.
    pub fn current_id(&self) -> &RoomId {
        &self.current
    }

    /// The room the player is in.
    ///
    /// # Errors
    /// Returns [`SessionError::CorruptGraph`] if the current id isn't in
    /// the maze. Validated mazes never get here.
    pub fn current_room(&self) -> Result<&Room, SessionError> {
        self.maze
            .room(&self.current)
            .ok_or_else(|| SessionError::CorruptGraph(self.current.clone()))
    }

    /// Moves the player one room in `direction` and returns the new room.
    ///
    /// On any error the player stays where they were.
    ///
    /// # Errors
    /// - [`SessionError::InvalidMove`] — no path that way
    /// - [`SessionError::CorruptGraph`] — the path leads out of the maze
    pub fn move_in(&mut self, direction: &str) -> Result<&Room, SessionError> {
        let from = self.current_room()?;
        let destination = navigation::resolve(from, direction)?
            .destination
            .clone();

        if self.maze.room(&destination).is_none() {
            return Err(SessionError::CorruptGraph(destination));
        }

        self.current = destination;
        self.current_room()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use mazeforge_maze::{DEMO_DEAD_END, DEMO_HUB, DEMO_START, DEMO_VICTORY, demo_maze};
    use mazeforge_protocol::{Direction, Effect};

    use super::*;

    fn demo_session() -> GameSession {
        GameSession::new(demo_maze("1").unwrap())
    }

    #[test]
    fn test_new_session_starts_at_start_room() {
        let session = demo_session();

        assert_eq!(session.current_id().as_str(), DEMO_START);
        let room = session.current_room().unwrap();
        assert_eq!(room.effect, Some(Effect::Start));
    }

    #[test]
    fn test_current_room_is_idempotent() {
        let session = demo_session();

        let first = session.current_room().unwrap().clone();
        let second = session.current_room().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_move_in_follows_path() {
        let mut session = demo_session();

        let room = session.move_in("north").unwrap();
        assert_eq!(room.id.as_str(), DEMO_HUB);
        assert_eq!(session.current_id().as_str(), DEMO_HUB);
    }

    #[test]
    fn test_move_in_invalid_direction_keeps_position() {
        let mut session = demo_session();

        let result = session.move_in("West");
        assert!(matches!(result, Err(SessionError::InvalidMove { .. })));
        assert_eq!(session.current_id().as_str(), DEMO_START);

        let result = session.move_in("Up");
        assert!(matches!(result, Err(SessionError::InvalidMove { .. })));
        assert_eq!(session.current_id().as_str(), DEMO_START);
    }

    #[test]
    fn test_move_in_victory_is_not_terminal() {
        let mut session = demo_session();
        session.move_in("North").unwrap();
        let victory = session.move_in("North").unwrap();
        assert_eq!(victory.id.as_str(), DEMO_VICTORY);
        assert_eq!(victory.effect, Some(Effect::Victory));

        // Still free to walk back out.
        let hub = session.move_in("south").unwrap();
        assert_eq!(hub.id.as_str(), DEMO_HUB);
    }

    #[test]
    fn test_move_in_dead_end_and_back() {
        let mut session = demo_session();
        session.move_in("NORTH").unwrap();

        let dead_end = session.move_in("east").unwrap();
        assert_eq!(dead_end.id.as_str(), DEMO_DEAD_END);
        assert!(session.move_in("East").is_err());

        let hub = session.move_in("WEST").unwrap();
        assert_eq!(hub.id.as_str(), DEMO_HUB);
    }

    #[test]
    fn test_move_in_sessions_on_cloned_maze_are_isolated() {
        let maze = demo_maze("1").unwrap();
        let mut first = GameSession::new(maze.clone());
        let second = GameSession::new(maze.clone());

        first.move_in("North").unwrap();
        first.move_in("East").unwrap();

        assert_eq!(first.maze(), &maze, "moving never edits the maze");
        assert_eq!(second.maze(), first.maze());
        assert_eq!(second.current_id().as_str(), DEMO_START);
        assert_eq!(first.current_id().as_str(), DEMO_DEAD_END);
    }

    #[test]
    fn test_move_in_dangling_path_returns_corrupt_graph() {
        let start = RoomId::new("start");
        let room = Room::new(start.clone(), "1")
            .with_effect(Effect::Start)
            .with_path(Direction::North, RoomId::new("void"));
        let rooms = HashMap::from([(start.clone(), room)]);
        let mut session = GameSession::new(Maze::new_unchecked(rooms, start));

        let result = session.move_in("North");
        assert_eq!(
            result.map(|r| r.id.clone()),
            Err(SessionError::CorruptGraph(RoomId::new("void")))
        );
        assert_eq!(session.current_id().as_str(), "start");
    }

    #[test]
    fn test_current_room_missing_returns_corrupt_graph() {
        let session = GameSession::new(Maze::new_unchecked(
            HashMap::new(),
            RoomId::new("ghost"),
        ));

        assert_eq!(
            session.current_room().cloned(),
            Err(SessionError::CorruptGraph(RoomId::new("ghost")))
        );
    }
}
