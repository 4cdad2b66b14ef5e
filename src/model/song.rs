use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A single song in a playlist
///
/// Identity is the `(name, artist)` pair: two songs with the same name and
/// artist are equal regardless of genre or duration. Name and artist are
/// fixed at construction, genre and duration may change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    name: String,
    artist: String,
    genre: Genre,
    /// Duration in seconds
    duration: u32,
}

/// Song genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Pop,
    Rock,
    HipHop,
    Country,
    Jazz,
    Disco,
}

impl Song {
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: Genre,
        duration: u32,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            genre,
            duration,
        }
    }

    /// Song title, part of the identity
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Performing artist, part of the identity
    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn set_genre(&mut self, genre: Genre) {
        self.genre = genre;
    }

    /// Duration in seconds
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
    }

    /// Returns true if this song has the given name and artist
    pub fn same_identity(&self, name: &str, artist: &str) -> bool {
        self.name == name && self.artist == artist
    }

    /// Stable numeric hash: sum of the UTF-16 code units of name and artist
    ///
    /// Only identity fields take part, so equal songs always share a code.
    pub fn hash_code(&self) -> i32 {
        char_code_sum(&self.name).wrapping_add(char_code_sum(&self.artist))
    }
}

fn char_code_sum(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |sum, unit| sum.wrapping_add(i32::from(unit)))
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.artist == other.artist
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.artist.hash(state);
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name,
            self.artist,
            self.genre,
            format_duration(self.duration)
        )
    }
}

/// Parses `name;artist;GENRE;seconds`
impl FromStr for Song {
    type Err = ParseError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ParseError::Song {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = spec.split(';').map(str::trim).collect();
        let [name, artist, genre, duration] = parts.as_slice() else {
            return Err(invalid("expected 4 ';'-separated fields"));
        };
        if name.is_empty() || artist.is_empty() {
            return Err(invalid("name and artist must not be empty"));
        }

        let genre = genre.parse::<Genre>()?;
        let duration = duration
            .parse::<u32>()
            .map_err(|_| invalid("duration must be a non-negative number of seconds"))?;

        Ok(Song::new(*name, *artist, genre, duration))
    }
}

impl Genre {
    /// All genres in declaration order
    pub const ALL: [Genre; 6] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Country,
        Genre::Jazz,
        Genre::Disco,
    ];

    /// Upper-case display name
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Pop => "POP",
            Genre::Rock => "ROCK",
            Genre::HipHop => "HIP_HOP",
            Genre::Country => "COUNTRY",
            Genre::Jazz => "JAZZ",
            Genre::Disco => "DISCO",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; accepts `HIP_HOP`, `hip-hop` and `hiphop`
impl FromStr for Genre {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();

        Genre::ALL
            .into_iter()
            .find(|g| g.name().replace('_', "") == folded)
            .ok_or_else(|| ParseError::Genre(s.to_string()))
    }
}

/// Formats a duration in seconds as `M:SS`
///
/// Minutes are not padded. Durations under a minute render as `00:SS`.
pub fn format_duration(total_seconds: u32) -> String {
    if total_seconds < 60 {
        return format!("00:{:02}", total_seconds);
    }
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
