//! Error types for the server: one for startup, one for requests.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mazeforge_maze::MazeError;
use mazeforge_protocol::ErrorBody;
use mazeforge_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// This is what building and running the server can fail with. The
/// `#[from]` attribute on each variant auto-generates `From` impls, so the
/// `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum MazeforgeError {
    /// A maze-level error (bad generator config, broken graph).
    #[error(transparent)]
    Maze(#[from] MazeError),

    /// A session-level error.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Invalid server configuration (e.g. an unparseable `PORT`).
    #[error("invalid server config: {0}")]
    Config(String),

    /// Binding or serving the listener failed.
    #[error("server i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The three ways a request can fail, as seen by the client.
///
/// - **Unauthorized** (401) — no bearer token, or one the store doesn't know
/// - **InvalidMove** (400) — known session, but no path that way
/// - **Internal** (500) — anything else: malformed body, broken maze,
///   a panicking handler
///
/// The detail inside `Internal` is logged, never sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("authorization token required or invalid")]
    Unauthorized,

    #[error("invalid move")]
    InvalidMove,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidMove => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound => Self::Unauthorized,
            SessionError::InvalidMove { .. } => Self::InvalidMove,
            SessionError::CorruptGraph(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<MazeError> for ApiError {
    fn from(err: MazeError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Unauthorized => (
                status,
                Json(ErrorBody::new("Authorization token required or invalid")),
            )
                .into_response(),
            Self::InvalidMove => {
                (status, Json(ErrorBody::new("Invalid move"))).into_response()
            }
            Self::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                (status, "Something broke!").into_response()
            }
        }
    }
}
