//! Filter-aware traversal of a playlist
//!
//! Two traversal semantics exist. [`FilteredView`] only reads the exclusion
//! set and can be repeated with identical results. [`ConsumingIter`] spends
//! an exclusion entry each time it skips the matching position, so a second
//! pass sees fewer songs hidden.

use super::{Entry, EntryId};
use crate::model::Song;
use std::collections::HashSet;

/// Songs in display order, skipping every excluded song
pub struct FilteredView<'a> {
    pub(super) entries: &'a [Entry],
    pub(super) order: std::slice::Iter<'a, usize>,
    pub(super) excluded: &'a HashSet<EntryId>,
}

impl<'a> Iterator for FilteredView<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let entries: &'a [Entry] = self.entries;

        for &index in self.order.by_ref() {
            let entry = &entries[index];
            if self.excluded.contains(&entry.id) {
                log::trace!("skipping excluded song: {}", entry.song);
                continue;
            }
            return Some(&entry.song);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.order.size_hint().1)
    }
}

/// Songs in display order, consuming exclusions as they are passed
///
/// Before each yield, while the song at the cursor is excluded its entry is
/// removed from the exclusion set and the cursor moves past it.
pub struct ConsumingIter<'a> {
    pub(super) entries: &'a [Entry],
    pub(super) order: &'a [usize],
    pub(super) excluded: &'a mut HashSet<EntryId>,
    pub(super) cursor: usize,
}

impl<'a> Iterator for ConsumingIter<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let entries: &'a [Entry] = self.entries;

        while let Some(&index) = self.order.get(self.cursor) {
            let entry = &entries[index];
            if !self.excluded.remove(&entry.id) {
                break;
            }
            log::trace!("exclusion spent on: {}", entry.song);
            self.cursor += 1;
        }

        let &index = self.order.get(self.cursor)?;
        self.cursor += 1;
        Some(&entries[index].song)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.order.len().saturating_sub(self.cursor)))
    }
}

/// Traversal chosen by the playlist's [`super::FilterMode`]
pub enum Traversal<'a> {
    Persistent(FilteredView<'a>),
    Consuming(ConsumingIter<'a>),
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::Persistent(view) => view.next(),
            Traversal::Consuming(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Traversal::Persistent(view) => view.size_hint(),
            Traversal::Consuming(iter) => iter.size_hint(),
        }
    }
}
