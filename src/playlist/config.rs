//! Playlist configuration

use serde::{Deserialize, Serialize};

/// Configuration for a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistConfig {
    /// How [`super::Playlist::traverse`] treats excluded songs
    pub filter_mode: FilterMode,
}

/// Lifetime of filter exclusions during traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Excluded songs stay hidden on every traversal
    #[default]
    Persistent,

    /// Each exclusion hides one position once, then is spent.
    /// Kept for compatibility with playlists that relied on single-use filters.
    Consuming,
}

impl PlaylistConfig {
    /// Create a new configuration with persistent filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set filter mode
    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }
}
