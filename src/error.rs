//! Error types for stack and playlist operations

use thiserror::Error;

/// Failures raised by [`crate::stack::BoundedStack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// Requested capacity was below zero
    #[error("stack capacity must not be negative (got {0})")]
    InvalidCapacity(i64),

    /// Push on a stack that already holds `capacity` elements
    #[error("stack overflow: capacity of {capacity} reached")]
    Overflow { capacity: usize },

    /// Pop or peek on an empty stack
    #[error("stack underflow: the stack is empty")]
    Underflow,
}

/// Failures raised by [`crate::playlist::Playlist`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("song already exists in the playlist: {name} by {artist}")]
    DuplicateSong { name: String, artist: String },
}

/// Failures parsing textual forms of model values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown genre: {0}")]
    Genre(String),

    #[error("unknown scan order: {0}")]
    ScanOrder(String),

    #[error("invalid song spec {spec:?}: {reason}")]
    Song { spec: String, reason: String },
}
