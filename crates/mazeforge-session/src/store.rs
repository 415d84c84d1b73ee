//! The session store: every live game, keyed by bearer token.
//!
//! # Concurrency note
//!
//! The store is shared by every request handler, so it is internally
//! synchronized at two levels:
//!
//! - the token map sits behind an `RwLock` — lookups share it, only
//!   session creation takes it exclusively
//! - each session sits behind its own `Mutex`, so two racing moves on the
//!   same token run one after the other, while moves on different tokens
//!   never wait for each other
//!
//! The map lock is always released before a session lock is taken.
//!
//! Sessions are never removed. The store grows for the lifetime of the
//! process; expiry would need a last-used timestamp per session and a
//! sweep, neither of which exists yet.

use std::collections::HashMap;
use std::sync::Arc;

use mazeforge_maze::Maze;
use mazeforge_protocol::{Effect, Room, SessionToken};
use tokio::sync::{Mutex, RwLock};

use crate::{GameSession, SessionError};

/// A session handle that can be held across `.await` points without
/// holding the store's map lock.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// All game sessions in this process.
///
/// Construct one at startup and share it (e.g. behind an `Arc`) with every
/// request handler.
///
/// ## Lifecycle
///
/// ```text
/// create(maze) ──→ token ──→ current_room(token) / move_player(token, dir)
///                                      │
///                                      ▼
///                          lives until the process exits
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionToken, SharedSession>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new game on `maze` and returns its token.
    ///
    /// The player starts in the maze's start room.
    pub async fn create(&self, maze: Maze) -> SessionToken {
        let start = maze.start().clone();
        let room_count = maze.len();
        let session = Arc::new(Mutex::new(GameSession::new(maze)));

        let mut sessions = self.sessions.write().await;
        // 128 random bits make a collision practically impossible, but a
        // duplicate would hand one player another's game.
        let token = loop {
            let candidate = SessionToken::generate();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        sessions.insert(token.clone(), session);

        tracing::info!(
            token = %token.short(),
            %start,
            rooms = room_count,
            "session created"
        );
        token
    }

    /// Looks up a session by token.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] for an unknown token.
    pub async fn get(
        &self,
        token: &SessionToken,
    ) -> Result<SharedSession, SessionError> {
        let session = self.sessions.read().await.get(token).cloned();
        session.ok_or_else(|| {
            tracing::debug!(token = %token.short(), "unknown session token");
            SessionError::NotFound
        })
    }

    /// Returns a snapshot of the session's current room.
    ///
    /// # Errors
    /// - [`SessionError::NotFound`] — unknown token
    /// - [`SessionError::CorruptGraph`] — the session's maze is broken
    pub async fn current_room(
        &self,
        token: &SessionToken,
    ) -> Result<Room, SessionError> {
        let session = self.get(token).await?;
        let session = session.lock().await;
        let room = session.current_room()?.clone();
        Ok(room)
    }

    /// Moves the session's player in `direction` and returns the new room.
    ///
    /// The whole read-modify-write happens under the session's lock.
    ///
    /// # Errors
    /// - [`SessionError::NotFound`] — unknown token
    /// - [`SessionError::InvalidMove`] — no path that way; the player
    ///   stays put
    /// - [`SessionError::CorruptGraph`] — the path leads out of the maze
    pub async fn move_player(
        &self,
        token: &SessionToken,
        direction: &str,
    ) -> Result<Room, SessionError> {
        let session = self.get(token).await?;
        let mut session = session.lock().await;
        let from = session.current_id().clone();

        match session.move_in(direction) {
            Ok(room) => {
                tracing::info!(
                    token = %token.short(),
                    %from,
                    to = %room.id,
                    direction,
                    victory = room.effect == Some(Effect::Victory),
                    "player moved"
                );
                Ok(room.clone())
            }
            Err(e) => {
                tracing::debug!(
                    token = %token.short(),
                    room = %from,
                    direction,
                    error = %e,
                    "move rejected"
                );
                Err(e)
            }
        }
    }

    /// Number of sessions ever created in this process.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns `true` if no session has been created yet.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================
