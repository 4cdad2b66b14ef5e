//! Setlist - bounded stacks and filterable playlists
//!
//! This library provides a fixed-capacity LIFO stack with deep-copy cloning
//! and a music playlist supporting scan orders, cumulative filters and
//! filter-aware iteration.

pub mod error;
pub mod model;
pub mod playlist;
pub mod stack;

pub use error::{ParseError, PlaylistError, StackError};
pub use model::{Genre, ScanOrder, Song};
pub use playlist::{FilterMode, Filterable, Ordered, Playlist, PlaylistConfig};
pub use stack::{BoundedStack, DeepClone, Stack};
