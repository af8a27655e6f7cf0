use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A labeled region of the media timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    /// Unique identifier, stable across re-renders
    pub id: Uuid,
    /// Start offset in seconds
    pub start: f64,
    /// End offset in seconds (`start < end`)
    pub end: f64,
    /// Image resource for the hover card; an opaque URL passed through unmodified
    pub thumbnail: String,
    /// Display text, also used as the thumbnail alt text
    pub description: String,
}

impl Segment {
    /// Create a new segment covering `[start, end)`
    pub fn new(
        start: f64,
        end: f64,
        thumbnail: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            thumbnail: thumbnail.into(),
            description: description.into(),
        }
    }
}

/// Problems a caller-supplied segment list can have.
#[derive(Debug, Error, PartialEq)]
pub enum SegmentError {
    #[error("segment {id} has an empty or inverted time range ({start}..{end})")]
    EmptyRange { id: Uuid, start: f64, end: f64 },
    #[error("segment {id} has a negative start offset ({start})")]
    NegativeStart { id: Uuid, start: f64 },
    #[error("segment {id} has a non-finite time offset")]
    NonFinite { id: Uuid },
}

/// Check a segment list for well-formedness.
///
/// The overlay renders whatever it is given (malformed entries clamp to zero
/// width); this helper lets the caller surface bad data before mounting.
pub fn validate_segments(segments: &[Segment]) -> Result<(), SegmentError> {
    for segment in segments {
        if !segment.start.is_finite() || !segment.end.is_finite() {
            return Err(SegmentError::NonFinite { id: segment.id });
        }
        if segment.start < 0.0 {
            return Err(SegmentError::NegativeStart {
                id: segment.id,
                start: segment.start,
            });
        }
        if segment.start >= segment.end {
            return Err(SegmentError::EmptyRange {
                id: segment.id,
                start: segment.start,
                end: segment.end,
            });
        }
    }
    Ok(())
}
