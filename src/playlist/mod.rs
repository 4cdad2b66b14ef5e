//! Filterable, orderable playlist
//!
//! A [`Playlist`] owns its songs in insertion order and keeps a separate
//! display order derived from the current [`ScanOrder`]. Filters never remove
//! songs; they add songs to an exclusion set that traversal consults.

mod config;
mod filter;
mod iter;
mod traits;

pub use config::{FilterMode, PlaylistConfig};
pub use filter::ActiveFilters;
pub use iter::{ConsumingIter, FilteredView, Traversal};
pub use traits::{Filterable, Ordered};

use crate::error::PlaylistError;
use crate::model::{Genre, ScanOrder, Song};
use filter::Criterion;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier given to a song when it joins a playlist
pub(crate) type EntryId = u64;

/// A song together with its playlist-local id
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) id: EntryId,
    pub(crate) song: Song,
}

/// Ordered, filterable collection of unique songs
#[derive(Debug)]
pub struct Playlist {
    config: PlaylistConfig,

    /// Songs in the order they were added
    entries: Vec<Entry>,

    /// Display order, as indices into `entries`
    order: Vec<usize>,

    scan_order: ScanOrder,
    filters: ActiveFilters,
    excluded: HashSet<EntryId>,
    next_id: EntryId,
}

impl Playlist {
    /// Create an empty playlist with persistent filters
    pub fn new() -> Self {
        Self::with_config(PlaylistConfig::default())
    }

    /// Create an empty playlist with the given configuration
    pub fn with_config(config: PlaylistConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            order: Vec::new(),
            scan_order: ScanOrder::default(),
            filters: ActiveFilters::default(),
            excluded: HashSet::new(),
            next_id: 0,
        }
    }

    /// Configuration the playlist was created with
    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    /// Append a song to the end of both insertion and display order
    ///
    /// Fails with [`PlaylistError::DuplicateSong`] if a song with the same
    /// name and artist is already present.
    pub fn add_song(&mut self, song: Song) -> Result<(), PlaylistError> {
        if self.contains(&song) {
            log::warn!("rejecting duplicate song: {}", song);
            return Err(PlaylistError::DuplicateSong {
                name: song.name().to_string(),
                artist: song.artist().to_string(),
            });
        }

        log::debug!("adding song: {}", song);
        self.push_entry(song);
        Ok(())
    }

    fn push_entry(&mut self, song: Song) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry { id, song });
        self.order.push(self.entries.len() - 1);
    }

    /// Remove the song with the same identity as `song`
    ///
    /// Returns whether a song was removed. Any exclusion recorded for it is
    /// dropped too.
    pub fn remove_song(&mut self, song: &Song) -> bool {
        let Some(position) = self.entries.iter().position(|e| e.song == *song) else {
            return false;
        };

        let entry = self.entries.remove(position);
        self.excluded.remove(&entry.id);
        self.order.retain(|&index| index != position);
        for index in self.order.iter_mut().filter(|index| **index > position) {
            *index -= 1;
        }

        log::debug!("removed song: {}", entry.song);
        true
    }

    /// Re-derive the display order from the current songs
    ///
    /// `Name` and `Duration` are stable sorts of the current display order;
    /// `Adding` restores insertion order exactly.
    pub fn set_scanning_order(&mut self, order: ScanOrder) {
        self.scan_order = order;
        let entries = &self.entries;

        match order {
            ScanOrder::Adding => {
                self.order = (0..entries.len()).collect();
            }
            ScanOrder::Name => {
                self.order.sort_by(|&a, &b| {
                    let (a, b) = (&entries[a].song, &entries[b].song);
                    a.name()
                        .cmp(b.name())
                        .then_with(|| a.artist().cmp(b.artist()))
                });
            }
            ScanOrder::Duration => {
                self.order.sort_by_key(|&index| entries[index].song.duration());
            }
        }

        log::debug!("scan order set to {}", order);
    }

    /// Order applied by the last [`Playlist::set_scanning_order`]
    pub fn scan_order(&self) -> ScanOrder {
        self.scan_order
    }

    /// Hide every song not by `artist`. `None` records the value only.
    pub fn filter_artist(&mut self, artist: Option<&str>) {
        self.filters.artist = artist.map(str::to_string);
        if let Some(artist) = artist {
            self.exclude_unless(Criterion::Artist(artist));
        }
    }

    /// Hide every song not of `genre`. `None` records the value only.
    pub fn filter_genre(&mut self, genre: Option<Genre>) {
        self.filters.genre = genre;
        if let Some(genre) = genre {
            self.exclude_unless(Criterion::Genre(genre));
        }
    }

    /// Hide every song longer than `max_duration` seconds
    pub fn filter_duration(&mut self, max_duration: u32) {
        self.filters.max_duration = Some(max_duration);
        self.exclude_unless(Criterion::MaxDuration(max_duration));
    }

    fn exclude_unless(&mut self, criterion: Criterion<'_>) {
        let mut newly_excluded = 0;
        for &index in &self.order {
            let entry = &self.entries[index];
            if !criterion.matches(&entry.song) && self.excluded.insert(entry.id) {
                newly_excluded += 1;
            }
        }

        log::debug!(
            "filter {:?} excluded {} new song(s), {} excluded in total",
            criterion,
            newly_excluded,
            self.excluded.len()
        );
    }

    /// Last value passed to each filter operation
    pub fn active_filters(&self) -> &ActiveFilters {
        &self.filters
    }

    /// Number of songs currently hidden from traversal
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// Number of songs, hidden ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the playlist holds no songs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if a song with the same identity is present
    pub fn contains(&self, song: &Song) -> bool {
        self.entries.iter().any(|e| e.song == *song)
    }

    /// Mutable access to a song, for changing its genre or duration
    ///
    /// The display order is not re-derived; call
    /// [`Playlist::set_scanning_order`] to re-sort.
    pub fn get_mut(&mut self, name: &str, artist: &str) -> Option<&mut Song> {
        self.entries
            .iter_mut()
            .find(|e| e.song.same_identity(name, artist))
            .map(|e| &mut e.song)
    }

    /// Every song in display order, ignoring filters
    pub fn songs(&self) -> impl Iterator<Item = &Song> + '_ {
        self.order.iter().map(|&index| &self.entries[index].song)
    }

    /// Songs in display order with excluded songs hidden
    ///
    /// Does not modify the exclusion set, so repeated views agree.
    pub fn filtered_view(&self) -> FilteredView<'_> {
        FilteredView {
            entries: &self.entries,
            order: self.order.iter(),
            excluded: &self.excluded,
        }
    }

    /// Songs in display order, spending one exclusion per hidden position
    pub fn consuming_iter(&mut self) -> ConsumingIter<'_> {
        ConsumingIter {
            entries: &self.entries,
            order: &self.order,
            excluded: &mut self.excluded,
            cursor: 0,
        }
    }

    /// Traverse according to the configured [`FilterMode`]
    pub fn traverse(&mut self) -> Traversal<'_> {
        match self.config.filter_mode {
            FilterMode::Persistent => Traversal::Persistent(self.filtered_view()),
            FilterMode::Consuming => Traversal::Consuming(self.consuming_iter()),
        }
    }

    /// Sum of song hash codes plus the artist filter's hash
    pub fn hash_code(&self) -> i32 {
        self.entries
            .iter()
            .fold(self.filters.artist_hash_code(), |sum, e| {
                sum.wrapping_add(e.song.hash_code())
            })
    }
}

impl Ordered for Playlist {
    fn set_scanning_order(&mut self, order: ScanOrder) {
        Playlist::set_scanning_order(self, order)
    }

    fn scan_order(&self) -> ScanOrder {
        Playlist::scan_order(self)
    }
}

impl Filterable for Playlist {
    fn filter_artist(&mut self, artist: Option<&str>) {
        Playlist::filter_artist(self, artist)
    }

    fn filter_genre(&mut self, genre: Option<Genre>) {
        Playlist::filter_genre(self, genre)
    }

    fn filter_duration(&mut self, max_duration: u32) {
        Playlist::filter_duration(self, max_duration)
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies every song in display order into a fresh playlist
///
/// Filter values, exclusions and scan order are not copied; the
/// configuration is.
impl Clone for Playlist {
    fn clone(&self) -> Self {
        let mut copy = Playlist::with_config(self.config.clone());
        for song in self.songs() {
            copy.push_entry(song.clone());
        }
        copy
    }
}

/// Equal when both hold the same songs, in any order, and the same
/// last-applied filter values
impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|e| other.contains(&e.song))
            && self.filters == other.filters
    }
}

impl Eq for Playlist {}

impl Hash for Playlist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, song) in self.songs().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({})", song)?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = FilteredView<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.filtered_view()
    }
}

impl<'a> IntoIterator for &'a mut Playlist {
    type Item = &'a Song;
    type IntoIter = Traversal<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(songs: impl Iterator<Item = &'a Song>) -> Vec<&'a str> {
        songs.map(Song::name).collect()
    }

    #[test]
    fn test_playlist_creation() {
        let playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.scan_order(), ScanOrder::Adding);
        assert_eq!(playlist.config().filter_mode, FilterMode::Persistent);
        assert_eq!(playlist.to_string(), "[]");
    }

    #[test]
    fn test_remove_keeps_indices_consistent() {
        let mut playlist = Playlist::new();
        for (name, duration) in [("c", 3), ("a", 1), ("b", 2)] {
            playlist
                .add_song(Song::new(name, "X", Genre::Pop, duration))
                .unwrap();
        }
        playlist.set_scanning_order(ScanOrder::Name);
        playlist.filter_duration(1);
        assert_eq!(playlist.excluded_count(), 2);

        assert!(playlist.remove_song(&Song::new("c", "X", Genre::Rock, 0)));
        assert_eq!(names(playlist.songs()), vec!["a", "b"]);
        assert_eq!(playlist.excluded_count(), 1);

        playlist.set_scanning_order(ScanOrder::Adding);
        assert_eq!(names(playlist.songs()), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_missing_song() {
        let mut playlist = Playlist::new();
        playlist.add_song(Song::new("a", "X", Genre::Pop, 1)).unwrap();
        assert!(!playlist.remove_song(&Song::new("a", "Y", Genre::Pop, 1)));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_get_mut_then_resort() {
        let mut playlist = Playlist::new();
        playlist.add_song(Song::new("a", "X", Genre::Pop, 10)).unwrap();
        playlist.add_song(Song::new("b", "X", Genre::Pop, 20)).unwrap();

        playlist.get_mut("b", "X").unwrap().set_duration(5);
        assert!(playlist.get_mut("b", "Y").is_none());

        playlist.set_scanning_order(ScanOrder::Duration);
        assert_eq!(names(playlist.songs()), vec!["b", "a"]);
    }

    #[test]
    fn test_hash_code_includes_artist_filter() {
        let mut playlist = Playlist::new();
        playlist.add_song(Song::new("A", "B", Genre::Pop, 1)).unwrap();
        assert_eq!(playlist.hash_code(), 65 + 66);

        playlist.filter_artist(Some("B"));
        assert_eq!(playlist.hash_code(), 65 + 66 + 66);
    }
}
