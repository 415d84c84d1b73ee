//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

use crate::{RoomId, SessionToken};

/// Response to `POST /Game/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameResponse {
    /// Bearer token for every later request in this session.
    pub token: SessionToken,
    /// The room the session starts in.
    pub start_room: RoomId,
}

/// Body of `PUT /Player/move`.
///
/// `direction` stays a raw string here: an unknown direction is an
/// invalid move, not a malformed request, so parsing is left to the
/// navigation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub direction: String,
}

/// JSON error payload for domain errors: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
