pub(crate) mod playback_controls;
pub(crate) mod segment_track;
pub(crate) mod video_player;
