//! Maze generation.
//!
//! The random topology is a straight chain of rooms:
//!
//! ```text
//! [Start] ─N─ [1] ─E─ [2] ─S─ [3] ─W─ ... ─ [Victory]
//! ```
//!
//! There is no branching and no way back to a non-adjacent room, so every
//! interior room has exactly two paths and the two ends have one each.
//! Always taking the newest path out of a room walks straight to Victory.

use mazeforge_protocol::{Direction, Effect, Path, Room, RoomId};
use rand::Rng;

use crate::fixed::demo_maze;
use crate::{Maze, MazeConfig, MazeError, Topology};

/// Builds a fresh maze for every new session.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    config: MazeConfig,
}

impl MazeGenerator {
    /// Creates a generator after checking the config.
    ///
    /// # Errors
    /// Returns [`MazeError::InvalidConfig`] if the config can't produce a
    /// valid maze.
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The settings this generator was built with.
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Generates a maze using the thread-local RNG.
    ///
    /// # Errors
    /// Only fails if two of the fresh 128-bit room ids collide.
    pub fn generate(&self) -> Result<Maze, MazeError> {
        self.generate_with(&mut rand::rng())
    }

    /// Generates a maze drawing all randomness from `rng`.
    ///
    /// Pass a seeded RNG to get the same maze every time.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Maze, MazeError> {
        let maze = match self.config.topology {
            Topology::Random => {
                let count = rng
                    .random_range(self.config.min_rooms..=self.config.max_rooms);
                linear_chain(rng, count, &self.config.floor)?
            }
            Topology::Fixed => demo_maze(&self.config.floor)?,
        };

        tracing::debug!(
            topology = %self.config.topology,
            rooms = maze.len(),
            start = %maze.start(),
            "maze generated"
        );
        Ok(maze)
    }
}

/// Returns the `(forward, reverse)` directions for the link between room
/// `index` and room `index + 1`.
///
/// `forward` cycles North, East, South, West by position. `reverse` is the
/// entry two steps further along the same cycle. This stride-2 lookup is
/// the labeling clients have always seen; it is kept as-is rather than
/// replaced with a geometric opposite table.
pub fn link_directions(index: usize) -> (Direction, Direction) {
    (Direction::cyclic(index), Direction::cyclic(index + 2))
}

/// Builds a chain of `room_count` rooms with random ids.
///
/// Room 0 is `Start`, the last room is `Victory`.
///
/// # Errors
/// Returns [`MazeError::InvalidConfig`] for fewer than two rooms, or
/// [`MazeError::DuplicateRoom`] on an id collision.
pub fn linear_chain<R: Rng + ?Sized>(
    rng: &mut R,
    room_count: usize,
    floor: &str,
) -> Result<Maze, MazeError> {
    if room_count < 2 {
        return Err(MazeError::InvalidConfig(format!(
            "a chain needs at least 2 rooms, got {room_count}"
        )));
    }

    let mut rooms: Vec<Room> = (0..room_count)
        .map(|_| Room::new(RoomId::random(rng), floor))
        .collect();

    for i in 0..room_count - 1 {
        let (forward, reverse) = link_directions(i);
        let here = rooms[i].id.clone();
        let next = rooms[i + 1].id.clone();
        rooms[i].paths.push(Path::new(forward, next));
        rooms[i + 1].paths.push(Path::new(reverse, here));
    }

    rooms[0].effect = Some(Effect::Start);
    rooms[room_count - 1].effect = Some(Effect::Victory);

    let start = rooms[0].id.clone();
    Maze::from_rooms(rooms, start)
}
