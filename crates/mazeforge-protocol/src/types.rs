//! Core identity and vocabulary types for Mazeforge's wire format.
//!
//! Everything in here is small, cheap to clone, and serializes to a plain
//! JSON string. Clients never see Rust structure: a `RoomId` goes over
//! the wire as `"9f2c..."`, a `Direction` as `"North"`.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Number of random bytes behind every generated id and token.
///
/// 16 bytes = 128 bits, rendered as 32 lowercase hex characters.
const ID_BYTES: usize = 16;

/// Renders `ID_BYTES` random bytes from `rng` as a lowercase hex string.
///
/// `{:02x}` means: lowercase hex, zero-padded to 2 digits, so every id
/// has the same fixed length.
fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; ID_BYTES] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a room in a maze.
///
/// This is a "newtype wrapper" around `String`. Room ids are opaque: the
/// server never parses them, it only compares them. Generated rooms get a
/// 128-bit random hex id; the fixed demo maze uses hand-authored ids.
///
/// `#[serde(transparent)]` makes `RoomId("abc")` serialize as `"abc"`,
/// not as `{ "0": "abc" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Wraps an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Draws a fresh 128-bit random id from the given RNG.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(random_hex(rng))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The bearer token a client uses to address its game session.
///
/// Tokens are the only external handle to a session, so they must not be
/// guessable: each one is 128 bits from the thread-local CSPRNG. They never
/// expire. Same scheme as [`RoomId::random`], but an independent namespace.
/// A token is never derived from a room id or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        Self::random(&mut rand::rng())
    }

    /// Draws a token from the given RNG.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(random_hex(rng))
    }

    /// Wraps a token string received from a client.
    ///
    /// No validation happens here: an unknown token is simply one the
    /// session store can't find.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the full token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an 8-character prefix, safe to put in logs.
    pub fn short(&self) -> &str {
        // Tokens we issue are ASCII hex; client-supplied ones may not be,
        // so cut at a char boundary.
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal directions a path can lead in.
///
/// Serialized with the casing clients expect (`"North"`), but parsed
/// case-insensitively: `"north"`, `"NORTH"` and `"North"` are all `North`.
/// `#[serde(try_from = "String")]` routes deserialization through the
/// [`TryFrom<String>`] impl below, so JSON gets the same leniency as
/// [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// The cyclic order the maze generator walks directions in.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Returns the wire name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }

    /// Returns the direction at `index` in [`DIRECTIONS`], wrapping around.
    pub fn cyclic(index: usize) -> Self {
        DIRECTIONS[index % DIRECTIONS.len()]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIRECTIONS
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProtocolError::InvalidDirection(s.to_string()))
    }
}

impl TryFrom<String> for Direction {
    type Error = ProtocolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A special marker on a room.
///
/// Most rooms have no effect at all, which is modeled as
/// `Option<Effect>::None` and goes over the wire as `null`.
///
/// - **Start**: where every session begins. Exactly one per maze.
/// - **Victory**: the goal. Exactly one per maze. Reaching it doesn't end
///   the session; the client decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Start,
    Victory,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Victory => write!(f, "Victory"),
        }
    }
}
