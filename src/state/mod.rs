//! Application data model:
//! - Segment: labeled time ranges supplied by the host
//! - PlayerOptions: playback configuration passed at mount time

mod options;
mod segment;

pub use options::*;
pub use segment::*;
