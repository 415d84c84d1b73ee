//! Resolving a move request against a room's paths.
//!
//! Clients send directions as free-form strings. Matching is
//! case-insensitive and scans paths in insertion order, taking the first
//! hit. Anything that isn't North, East, South or West simply has no
//! matching path.

use mazeforge_protocol::{Direction, Path, Room};

use crate::SessionError;

/// Parses a client-supplied direction.
///
/// # Errors
/// Returns [`SessionError::InvalidMove`] if `input` isn't a cardinal
/// direction in any casing. An unknown direction is an invalid move, not
/// a malformed request.
pub fn parse_direction(input: &str) -> Result<Direction, SessionError> {
    input.parse().map_err(|_| SessionError::InvalidMove {
        direction: input.to_string(),
    })
}

/// Returns the first path out of `room` leading in the `requested`
/// direction.
///
/// # Errors
/// Returns [`SessionError::InvalidMove`] if nothing matches.
pub fn resolve<'a>(
    room: &'a Room,
    requested: &str,
) -> Result<&'a Path, SessionError> {
    let direction = parse_direction(requested)?;
    room.path_towards(direction)
        .ok_or_else(|| SessionError::InvalidMove {
            direction: requested.to_string(),
        })
}
