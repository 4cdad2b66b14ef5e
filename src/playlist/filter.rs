//! Filter criteria and the record of last-applied filter values

use crate::model::{Genre, Song};
use serde::{Deserialize, Serialize};

/// A single filter criterion
#[derive(Debug, Clone, Copy)]
pub(crate) enum Criterion<'a> {
    Artist(&'a str),
    Genre(Genre),
    MaxDuration(u32),
}

impl Criterion<'_> {
    /// Evaluate criterion against a song
    pub(crate) fn matches(&self, song: &Song) -> bool {
        match self {
            Criterion::Artist(artist) => song.artist() == *artist,
            Criterion::Genre(genre) => song.genre() == *genre,
            Criterion::MaxDuration(max) => song.duration() <= *max,
        }
    }
}

/// Last value passed to each filter operation
///
/// These take part in playlist equality and hashing. They do not decide
/// which songs are hidden; that is the playlist's exclusion set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveFilters {
    pub artist: Option<String>,
    pub genre: Option<Genre>,
    pub max_duration: Option<u32>,
}

impl ActiveFilters {
    /// Polynomial (base 31) hash of the artist filter, 0 when unset
    pub fn artist_hash_code(&self) -> i32 {
        self.artist.as_deref().map_or(0, |artist| {
            artist
                .encode_utf16()
                .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
        })
    }
}
