//! The room graph a session plays in.

use std::collections::{HashMap, HashSet, VecDeque};

use mazeforge_protocol::{Effect, Room, RoomId};

use crate::MazeError;

/// A complete maze: every room, keyed by id, plus where play begins.
///
/// A `Maze` built through [`Maze::new`] or [`Maze::from_rooms`] always
/// satisfies [`Maze::validate`]:
///
/// - each room is stored under its own id
/// - every path leads to a room in the maze
/// - exactly one room is `Start`, and it is the start id
/// - exactly one room is `Victory`
/// - every room is reachable from the start
///
/// Every other room has no effect, which the `Option<Effect>` field makes
/// true by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rooms: HashMap<RoomId, Room>,
    start: RoomId,
}

impl Maze {
    /// Builds a maze from a room map and validates it.
    ///
    /// # Errors
    /// Returns the first [`MazeError`] found by [`validate`](Self::validate).
    pub fn new(
        rooms: HashMap<RoomId, Room>,
        start: RoomId,
    ) -> Result<Self, MazeError> {
        let maze = Self { rooms, start };
        maze.validate()?;
        Ok(maze)
    }

    /// Builds a maze from a list of rooms and validates it.
    ///
    /// # Errors
    /// Returns [`MazeError::DuplicateRoom`] if two rooms share an id, or
    /// any error from [`validate`](Self::validate).
    pub fn from_rooms(
        rooms: Vec<Room>,
        start: RoomId,
    ) -> Result<Self, MazeError> {
        let mut map = HashMap::with_capacity(rooms.len());
        for room in rooms {
            let id = room.id.clone();
            if map.insert(id.clone(), room).is_some() {
                return Err(MazeError::DuplicateRoom(id));
            }
        }
        Self::new(map, start)
    }

    /// Builds a maze without validating it.
    ///
    /// Only for exercising code paths that must survive a broken graph;
    /// everything else should go through [`Maze::new`].
    #[doc(hidden)]
    pub fn new_unchecked(rooms: HashMap<RoomId, Room>, start: RoomId) -> Self {
        Self { rooms, start }
    }

    /// The id of the room every session starts in.
    pub fn start(&self) -> &RoomId {
        &self.start
    }

    /// Looks up a room by id.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Iterates over all rooms, in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Returns the room tagged `Victory`, if any.
    pub fn victory(&self) -> Option<&Room> {
        self.rooms
            .values()
            .find(|r| r.effect == Some(Effect::Victory))
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the maze has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Checks every structural invariant of the room graph.
    ///
    /// Checks run in a fixed order (keys, then paths, then effects, then
    /// reachability) and rooms are visited sorted by id, so a broken maze
    /// always reports the same violation.
    ///
    /// # Errors
    /// Returns the first violation found, see [`MazeError`].
    pub fn validate(&self) -> Result<(), MazeError> {
        let mut rooms: Vec<(&RoomId, &Room)> = self.rooms.iter().collect();
        rooms.sort_by(|a, b| a.0.cmp(b.0));

        for (key, room) in &rooms {
            if **key != room.id {
                return Err(MazeError::KeyMismatch {
                    key: (*key).clone(),
                    actual: room.id.clone(),
                });
            }
        }

        for (_, room) in &rooms {
            for path in &room.paths {
                if !self.rooms.contains_key(&path.destination) {
                    return Err(MazeError::DanglingPath {
                        from: room.id.clone(),
                        to: path.destination.clone(),
                    });
                }
            }
        }

        let mut starts = Vec::new();
        let mut victories = 0;
        for (_, room) in &rooms {
            match room.effect {
                Some(Effect::Start) => starts.push(&room.id),
                Some(Effect::Victory) => victories += 1,
                None => {}
            }
        }

        match starts.as_slice() {
            [] => return Err(MazeError::MissingStart),
            [only] if **only != self.start => {
                return Err(MazeError::StartMismatch(self.start.clone()));
            }
            [_] => {}
            many => return Err(MazeError::MultipleStarts(many.len())),
        }
        match victories {
            0 => return Err(MazeError::MissingVictory),
            1 => {}
            n => return Err(MazeError::MultipleVictories(n)),
        }

        let reachable = self.reachable_from_start();
        if let Some((id, _)) = rooms.iter().find(|(id, _)| !reachable.contains(*id)) {
            return Err(MazeError::Unreachable((*id).clone()));
        }

        Ok(())
    }

    /// Breadth-first walk over paths, starting at the start room.
    fn reachable_from_start(&self) -> HashSet<&RoomId> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();

        if let Some((id, _)) = self.rooms.get_key_value(&self.start) {
            seen.insert(id);
            queue.push_back(id);
        }

        while let Some(id) = queue.pop_front() {
            let Some(room) = self.rooms.get(id) else {
                continue;
            };
            for path in &room.paths {
                if let Some((dest, _)) =
                    self.rooms.get_key_value(&path.destination)
                {
                    if seen.insert(dest) {
                        queue.push_back(dest);
                    }
                }
            }
        }

        seen
    }
}
