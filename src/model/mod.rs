//! Value types shared by the playlist and its callers
//!
//! Songs, genres and scan orders are plain data with no knowledge of the
//! containers that hold them.

mod order;
mod song;

pub use order::ScanOrder;
pub use song::{format_duration, Genre, Song};
