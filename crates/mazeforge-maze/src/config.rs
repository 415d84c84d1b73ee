//! Maze generator configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MazeError;

// ---------------------------------------------------------------------------
// Topology
// ---------------------------------------------------------------------------

/// Which kind of maze the generator builds for a new session.
///
/// - **Random**: a fresh linear chain of rooms per session, with random
///   ids and a random length.
/// - **Fixed**: the hand-authored demo maze. Every session gets its own
///   copy, with the same ids each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    #[default]
    Random,
    Fixed,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

impl FromStr for Topology {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            Ok(Self::Random)
        } else if s.eq_ignore_ascii_case("fixed") {
            Ok(Self::Fixed)
        } else {
            Err(MazeError::InvalidConfig(format!(
                "unknown topology {s:?}, expected \"random\" or \"fixed\""
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// MazeConfig
// ---------------------------------------------------------------------------

/// Settings for [`MazeGenerator`](crate::MazeGenerator).
///
/// Start from `MazeConfig::default()` and override what you need:
///
/// ```rust
/// use mazeforge_maze::{MazeConfig, Topology};
///
/// let config = MazeConfig {
///     topology: Topology::Fixed,
///     ..MazeConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Random chain or the fixed demo maze.
    pub topology: Topology,

    /// Fewest rooms a random maze may have (inclusive).
    pub min_rooms: usize,

    /// Most rooms a random maze may have (inclusive).
    pub max_rooms: usize,

    /// Floor label stamped on every room.
    pub floor: String,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Random,
            min_rooms: 4,
            max_rooms: 10,
            floor: "1".to_string(),
        }
    }
}

impl MazeConfig {
    /// Checks that the settings can produce a valid maze.
    ///
    /// A random maze needs at least two rooms: Start and Victory must be
    /// different rooms.
    ///
    /// # Errors
    /// Returns [`MazeError::InvalidConfig`] describing the problem.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.min_rooms < 2 {
            return Err(MazeError::InvalidConfig(format!(
                "min_rooms must be at least 2, got {}",
                self.min_rooms
            )));
        }
        if self.min_rooms > self.max_rooms {
            return Err(MazeError::InvalidConfig(format!(
                "min_rooms ({}) exceeds max_rooms ({})",
                self.min_rooms, self.max_rooms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_config_default() {
        let config = MazeConfig::default();
        assert_eq!(config.topology, Topology::Random);
        assert_eq!(config.min_rooms, 4);
        assert_eq!(config.max_rooms, 10);
        assert_eq!(config.floor, "1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_single_room() {
        let config = MazeConfig {
            min_rooms: 1,
            ..MazeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MazeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = MazeConfig {
            min_rooms: 8,
            max_rooms: 5,
            ..MazeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MazeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_accepts_exact_count() {
        let config = MazeConfig {
            min_rooms: 6,
            max_rooms: 6,
            ..MazeConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_topology_parse() {
        assert_eq!("random".parse::<Topology>(), Ok(Topology::Random));
        assert_eq!("FIXED".parse::<Topology>(), Ok(Topology::Fixed));
        assert!("spiral".parse::<Topology>().is_err());
    }

    #[test]
    fn test_topology_serializes_lowercase() {
        let json = serde_json::to_string(&Topology::Fixed).unwrap();
        assert_eq!(json, "\"fixed\"");
        assert_eq!(Topology::Random.to_string(), "random");
    }
}
