//! Shared UI constants: colors, seek-bar sizing, and element ids.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_VIDEO: &str = "#22c55e";

/// Id of the `<video>` element the playback handle drives through eval.
pub const VIDEO_ELEMENT_ID: &str = "segment-video";
/// Id of the seek-bar container, used to measure its width on demand.
pub const TRACK_ELEMENT_ID: &str = "segment-track";

pub const TRACK_HEIGHT_PX: f64 = 16.0;
pub const CARD_WIDTH_PX: f64 = 160.0;
pub const CARD_THUMB_HEIGHT_PX: f64 = 90.0;

/// Regions render dimmed until hovered.
pub const REGION_IDLE_OPACITY: f64 = 0.45;
pub const REGION_HOVER_OPACITY: f64 = 0.9;
