//! Ordering and filtering capabilities of a song collection

use crate::model::{Genre, ScanOrder};

/// Collection whose display order can be re-derived
pub trait Ordered {
    /// Re-derive the display order
    fn set_scanning_order(&mut self, order: ScanOrder);

    /// Order applied by the last [`Ordered::set_scanning_order`]
    fn scan_order(&self) -> ScanOrder;
}

/// Collection that hides songs failing cumulative criteria
pub trait Filterable {
    /// Hide every song not by `artist`; `None` hides nothing
    fn filter_artist(&mut self, artist: Option<&str>);

    /// Hide every song not of `genre`; `None` hides nothing
    fn filter_genre(&mut self, genre: Option<Genre>);

    /// Hide every song longer than `max_duration` seconds
    fn filter_duration(&mut self, max_duration: u32);
}
