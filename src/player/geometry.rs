//! Seek-bar geometry: segment spans and pointer positions as track fractions.
//!
//! All functions are pure. They return `None` while the media duration is
//! unusable (zero, negative, or non-finite); callers defer layout until the
//! player has reported loadedmetadata.

/// Fraction of the track covered by `[start, end)`, clamped to `[0, 1]`.
/// Out-of-range segments clip against the media duration instead of failing.
pub fn width_fraction(start: f64, end: f64, duration: f64) -> Option<f64> {
    if !usable_duration(duration) {
        return None;
    }
    let start = start.clamp(0.0, duration);
    let end = end.clamp(0.0, duration);
    Some(((end - start).max(0.0) / duration).clamp(0.0, 1.0))
}

/// Fraction of the track left of `start`, clamped to `[0, 1]`.
pub fn offset_fraction(start: f64, duration: f64) -> Option<f64> {
    if !usable_duration(duration) {
        return None;
    }
    Some((start.clamp(0.0, duration) / duration).clamp(0.0, 1.0))
}

/// `width_fraction` as a CSS percentage string, e.g. "32.26%".
pub fn width_percent(start: f64, end: f64, duration: f64) -> Option<String> {
    width_fraction(start, end, duration).map(as_percent)
}

/// `offset_fraction` as a CSS percentage string.
pub fn offset_percent(start: f64, duration: f64) -> Option<String> {
    offset_fraction(start, duration).map(as_percent)
}

/// Seek target for a pointer at `pointer_x` within a track `track_width`
/// pixels wide. Positions outside the track clamp to its edges.
pub fn seek_time_at(pointer_x: f64, track_width: f64, duration: f64) -> Option<f64> {
    if !usable_duration(duration) || !track_width.is_finite() || track_width <= 0.0 {
        return None;
    }
    if !pointer_x.is_finite() {
        return None;
    }
    let fraction = (pointer_x / track_width).clamp(0.0, 1.0);
    Some(fraction * duration)
}

fn usable_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}

fn as_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}
