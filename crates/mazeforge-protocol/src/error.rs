//! Error types for the protocol layer.
//!
//! Each crate in Mazeforge defines its own error enum. When you see a
//! `ProtocolError`, you know the problem is a malformed wire value, not
//! a missing session or a broken maze.

/// Errors that can occur while parsing protocol values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The string is not one of the four cardinal directions.
    ///
    /// Parsing is case-insensitive, so this only fires for strings like
    /// `"Up"` or `""`, never for `"north"` vs `"North"`.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),
}
