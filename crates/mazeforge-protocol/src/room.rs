//! Rooms and the paths between them.
//!
//! These are the structures a client sees when it asks "where am I?". The
//! JSON shape is fixed by existing clients:
//!
//! ```json
//! {
//!   "id": "572c5e10-564a-43e6-a489-e12dfe94d57c",
//!   "floor": "1",
//!   "paths": [
//!     { "requiredItem": null, "direction": "North", "destination": "0af6..." }
//!   ],
//!   "effect": "Start"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{Direction, Effect, RoomId};

/// A directed edge from one room to another.
///
/// Paths always come in pairs in a well-formed maze (one each way), but
/// each half is stored on its own source room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    /// An item the player would need to take this path.
    ///
    /// Always `None` today and never checked during navigation. Kept so the
    /// wire format has room for item-gating later.
    pub required_item: Option<String>,

    /// Which way the path leads out of its source room.
    pub direction: Direction,

    /// The room this path leads to.
    pub destination: RoomId,
}

impl Path {
    /// Creates an ungated path.
    pub fn new(direction: Direction, destination: RoomId) -> Self {
        Self {
            required_item: None,
            direction,
            destination,
        }
    }
}

/// A single room in a maze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique within its maze.
    pub id: RoomId,

    /// Floor label. Every maze so far is single-floor.
    pub floor: String,

    /// Outgoing paths in insertion order. Navigation takes the first
    /// path matching a direction, so order matters.
    pub paths: Vec<Path>,

    /// `Start`, `Victory`, or `None` for an ordinary room.
    pub effect: Option<Effect>,
}

impl Room {
    /// Creates a room with no paths and no effect.
    pub fn new(id: RoomId, floor: impl Into<String>) -> Self {
        Self {
            id,
            floor: floor.into(),
            paths: Vec::new(),
            effect: None,
        }
    }

    /// Builder-style helper to set the effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Builder-style helper to append a path.
    pub fn with_path(mut self, direction: Direction, destination: RoomId) -> Self {
        self.paths.push(Path::new(direction, destination));
        self
    }

    /// Returns the first path leading in `direction`, if any.
    pub fn path_towards(&self, direction: Direction) -> Option<&Path> {
        self.paths.iter().find(|p| p.direction == direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_room() -> Room {
        Room::new(RoomId::new("r1"), "1")
            .with_effect(Effect::Start)
            .with_path(Direction::North, RoomId::new("r2"))
    }

    #[test]
    fn test_room_json_shape_matches_clients() {
        let json: serde_json::Value =
            serde_json::to_value(sample_room()).unwrap();

        assert_eq!(json["id"], "r1");
        assert_eq!(json["floor"], "1");
        assert_eq!(json["effect"], "Start");
        assert_eq!(json["paths"][0]["direction"], "North");
        assert_eq!(json["paths"][0]["destination"], "r2");
        // camelCase and explicit null, not omitted.
        assert!(json["paths"][0].get("requiredItem").is_some());
        assert!(json["paths"][0]["requiredItem"].is_null());
    }

    #[test]
    fn test_room_without_effect_serializes_null() {
        let room = Room::new(RoomId::new("plain"), "1");
        let json: serde_json::Value = serde_json::to_value(&room).unwrap();

        assert!(json["effect"].is_null());
        assert_eq!(json["paths"], serde_json::json!([]));
    }

    #[test]
    fn test_room_deserializes_from_client_json() {
        let json = r#"{
            "id": "r1",
            "floor": "1",
            "paths": [
                { "requiredItem": null, "direction": "north", "destination": "r2" }
            ],
            "effect": "Start"
        }"#;

        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room, sample_room());
    }

    #[test]
    fn test_path_towards_returns_first_match() {
        let room = Room::new(RoomId::new("hub"), "1")
            .with_path(Direction::East, RoomId::new("a"))
            .with_path(Direction::East, RoomId::new("b"));

        let path = room.path_towards(Direction::East).unwrap();
        assert_eq!(path.destination, RoomId::new("a"));
        assert!(room.path_towards(Direction::West).is_none());
    }
}
