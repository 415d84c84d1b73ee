//! Request handlers: bearer auth, body decoding, and dispatch into the
//! session store.
//!
//! Every request that names a session follows the same flow:
//!   1. Pull the token out of the `Authorization` header
//!   2. Look the session up → 401 if the store doesn't know it
//!   3. Decode the body (moves only) → 500 if it's malformed
//!   4. Run the operation and reply with the resulting room

use std::any::Any;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Response};
use mazeforge_protocol::{MoveRequest, Room, SessionToken, StartGameResponse};

use crate::ApiError;
use crate::server::ServerState;

/// `POST /Game/start` — new maze, new session.
pub(crate) async fn start_game(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<StartGameResponse>, ApiError> {
    let maze = state.generator.generate()?;
    let start_room = maze.start().clone();
    let token = state.sessions.create(maze).await;

    Ok(Json(StartGameResponse { token, start_room }))
}

/// `GET /Room/current` — where the session's player stands.
pub(crate) async fn current_room(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
) -> Result<Json<Room>, ApiError> {
    let token = bearer_token(&headers)?;
    let room = state.sessions.current_room(&token).await?;
    Ok(Json(room))
}

/// `PUT /Player/move` — step through one of the current room's paths.
///
/// The body is taken as raw bytes and decoded only after the token checks
/// out, so an unknown session is always reported as 401 whatever the body.
pub(crate) async fn move_player(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Room>, ApiError> {
    let token = bearer_token(&headers)?;
    state.sessions.get(&token).await?;

    let request: MoveRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("bad move body: {e}")))?;

    let room = state
        .sessions
        .move_player(&token, &request.direction)
        .await?;
    Ok(Json(room))
}

/// Extracts the session token from `Authorization: Bearer <token>`.
///
/// Only the second whitespace-separated segment is read; the scheme word
/// itself is not checked. Runs of whitespace count as one separator, so
/// `Bearer  tok` (two spaces) is accepted as `tok`.
///
/// # Errors
/// Returns [`ApiError::Unauthorized`] if the header is missing, isn't
/// valid ASCII, or has no second segment.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<SessionToken, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().nth(1))
        .map(SessionToken::new);

    match token {
        Some(token) => Ok(token),
        None => {
            tracing::debug!("request without a usable bearer token");
            Err(ApiError::Unauthorized)
        }
    }
}

/// Turns a handler panic into the generic 500 response.
pub(crate) fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(%detail, "handler panicked");
    ApiError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, StatusCode};

    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_reads_second_segment() {
        let token = bearer_token(&headers_with("Bearer abc123")).unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_bearer_token_ignores_extra_whitespace() {
        let token = bearer_token(&headers_with("Bearer   abc123  ")).unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_bearer_token_missing_header_is_unauthorized() {
        assert_eq!(bearer_token(&HeaderMap::new()), Err(ApiError::Unauthorized));
    }

    #[test]
    fn test_bearer_token_no_second_segment_is_unauthorized() {
        assert_eq!(
            bearer_token(&headers_with("Bearer")),
            Err(ApiError::Unauthorized)
        );
        assert_eq!(bearer_token(&headers_with("")), Err(ApiError::Unauthorized));
    }

    #[test]
    fn test_handle_panic_returns_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u32));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
