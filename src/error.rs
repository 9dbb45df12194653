//! Error kinds for the game core.

use thiserror::Error;

/// Errors produced by the game core.
///
/// Very little in this crate can fail: collision queries answer out-of-bounds
/// positions with "disallowed" rather than an error, and score submissions
/// with an empty name are ignored by policy. What remains is configuration
/// mistakes, which fail fast instead of being silently clamped.
#[derive(Debug, Error)]
pub enum GameError {
    /// Maze dimensions outside the supported range. Generation requires at
    /// least a 1x1 grid; anything smaller is a programming or configuration
    /// error on the caller's side.
    #[error("invalid maze dimensions {width}x{height}: both sides must be at least 1")]
    InvalidDimensions {
        /// Requested grid width in cells.
        width: usize,
        /// Requested grid height in cells.
        height: usize,
    },
}
