//! Player core: the playback handle, seek-bar geometry, and the segment
//! overlay controller the UI components render from.

pub mod engine;
pub mod geometry;
pub mod overlay;
