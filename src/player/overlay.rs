//! Segment overlay controller.
//!
//! Owns everything behind the segment-annotated seek bar: region geometry
//! derived from the segment list and the media duration, hover and card
//! visibility, click-to-seek, and the mount/teardown lifecycle. The
//! `SegmentTrack` component is a pure view over this state.

use uuid::Uuid;

use crate::state::Segment;

use super::engine::PlayerHandle;
use super::geometry;

/// Where the overlay is in its mount cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// No player attached yet.
    Uninitialized,
    /// Player constructed; waiting for media metadata.
    Ready,
    /// Regions built and live.
    Mounted,
    /// Torn down. Terminal.
    Disposed,
}

/// One visual region on the track together with its hover card. The pair is
/// created and destroyed as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub segment_id: Uuid,
    /// Seek target for a card click; also carried on the region node as data.
    pub start: f64,
    pub left_percent: String,
    pub width_percent: String,
    /// Hovered regions render at active opacity with their card shown.
    pub hovered: bool,
    pub thumbnail: String,
    pub description: String,
}

/// State machine driving the seek-bar overlay for one mounted player.
pub struct OverlayController {
    segments: Vec<Segment>,
    regions: Vec<Region>,
    hovered_id: Option<Uuid>,
    mounted: bool,
    built_duration: Option<f64>,
    phase: LifecyclePhase,
    player: Option<PlayerHandle>,
}

impl OverlayController {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            regions: Vec::new(),
            hovered_id: None,
            mounted: false,
            built_duration: None,
            phase: LifecyclePhase::Uninitialized,
            player: None,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn hovered_id(&self) -> Option<Uuid> {
        self.hovered_id
    }

    /// Player constructed and ready. The overlay still waits for metadata
    /// before building anything.
    pub fn attach_player(&mut self, player: PlayerHandle) {
        if self.phase != LifecyclePhase::Uninitialized {
            return;
        }
        self.player = Some(player);
        self.phase = LifecyclePhase::Ready;
    }

    /// Media metadata arrived: build the regions. Safe to call repeatedly.
    /// An unchanged duration is a no-op; a changed one (source swap)
    /// recomputes the geometry for the same segment list.
    pub fn handle_metadata_loaded(&mut self) {
        if self.phase != LifecyclePhase::Ready && self.phase != LifecyclePhase::Mounted {
            return;
        }
        let duration = match &self.player {
            Some(player) if player.has_known_duration() => player.duration(),
            _ => {
                tracing::debug!("overlay build deferred: duration not yet known");
                return;
            }
        };
        if self.mounted && self.built_duration == Some(duration) {
            return;
        }
        self.regions = build_regions(&self.segments, duration);
        self.hovered_id = None;
        self.built_duration = Some(duration);
        if !self.mounted {
            self.mounted = true;
            self.phase = LifecyclePhase::Mounted;
            tracing::info!(
                regions = self.regions.len(),
                duration,
                "segment overlay mounted"
            );
        }
    }

    /// Replace the segment list. Rebuilds the regions only when the list
    /// actually changed; a re-render with identical segments leaves the live
    /// overlay untouched.
    pub fn set_segments(&mut self, segments: Vec<Segment>) {
        if self.phase == LifecyclePhase::Disposed || segments == self.segments {
            return;
        }
        self.segments = segments;
        if self.mounted {
            if let Some(duration) = self.built_duration {
                self.regions = build_regions(&self.segments, duration);
                self.hovered_id = None;
            }
        }
    }

    /// Pointer entered a region. At most one region may be hovered, so any
    /// previous hover is cleared in the same pass.
    pub fn pointer_enter(&mut self, segment_id: Uuid) {
        if !self.mounted {
            return;
        }
        let mut found = false;
        for region in &mut self.regions {
            let hit = region.segment_id == segment_id;
            region.hovered = hit;
            found |= hit;
        }
        self.hovered_id = found.then_some(segment_id);
    }

    /// Pointer left a region. Only clears state belonging to that region.
    pub fn pointer_leave(&mut self, segment_id: Uuid) {
        if !self.mounted {
            return;
        }
        for region in &mut self.regions {
            if region.segment_id == segment_id {
                region.hovered = false;
            }
        }
        if self.hovered_id == Some(segment_id) {
            self.hovered_id = None;
        }
    }

    /// Track-level seek from a pointer position within the track. Works
    /// regardless of hover state; ignored while the duration is unknown.
    pub fn track_seek(&self, pointer_x: f64, track_width: f64) {
        let Some(player) = self.player.as_ref() else {
            return;
        };
        let Some(time) = geometry::seek_time_at(pointer_x, track_width, player.duration()) else {
            tracing::debug!(pointer_x, track_width, "track seek ignored");
            return;
        };
        player.seek(time);
    }

    /// Pointer entered the track. Seeks only when the entry point lies over
    /// bare track background; an entry directly over a region belongs to that
    /// region's hover handling, not to seeking.
    pub fn track_enter(&self, pointer_x: f64, track_width: f64) {
        let Some(player) = self.player.as_ref() else {
            return;
        };
        let Some(time) = geometry::seek_time_at(pointer_x, track_width, player.duration()) else {
            return;
        };
        if self
            .segments
            .iter()
            .any(|segment| segment.start <= time && time < segment.end)
        {
            return;
        }
        player.seek(time);
    }

    /// Card click: seek straight to the owning segment's start.
    pub fn card_seek(&self, segment_id: Uuid) {
        if !self.mounted {
            return;
        }
        let Some(player) = self.player.as_ref() else {
            return;
        };
        if let Some(region) = self.regions.iter().find(|r| r.segment_id == segment_id) {
            player.seek(region.start);
        }
    }

    /// Tear the overlay down: drop every region/card record, the hover
    /// state, and the player reference. Safe to call any number of times.
    pub fn dispose(&mut self) {
        if self.phase == LifecyclePhase::Disposed {
            return;
        }
        self.regions.clear();
        self.hovered_id = None;
        self.mounted = false;
        self.built_duration = None;
        self.player = None;
        self.phase = LifecyclePhase::Disposed;
    }
}

fn build_regions(segments: &[Segment], duration: f64) -> Vec<Region> {
    segments
        .iter()
        .map(|segment| Region {
            segment_id: segment.id,
            start: segment.start,
            left_percent: geometry::offset_percent(segment.start, duration)
                .unwrap_or_else(|| "0.00%".to_string()),
            width_percent: geometry::width_percent(segment.start, segment.end, duration)
                .unwrap_or_else(|| "0.00%".to_string()),
            hovered: false,
            thumbnail: segment.thumbnail.clone(),
            description: segment.description.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::player::engine::test_support::{seeks, RecordingSurface, SurfaceCall};
    use crate::state::PlayerOptions;

    fn sample_segments() -> Vec<Segment> {
        vec![
            Segment::new(0.0, 20.0, "segment-1.png", "Segment 1"),
            Segment::new(20.0, 40.0, "segment-2.png", "Segment 2"),
            Segment::new(40.0, 62.0, "segment-3.png", "Segment 3"),
        ]
    }

    fn ready_controller(
        segments: Vec<Segment>,
    ) -> (OverlayController, PlayerHandle, Rc<RefCell<Vec<SurfaceCall>>>) {
        let surface = RecordingSurface::default();
        let calls = surface.calls();
        let player = PlayerHandle::new(PlayerOptions::default(), Box::new(surface));
        let mut controller = OverlayController::new(segments);
        controller.attach_player(player.clone());
        (controller, player, calls)
    }

    fn mounted_controller() -> (OverlayController, PlayerHandle, Rc<RefCell<Vec<SurfaceCall>>>) {
        let (mut controller, player, calls) = ready_controller(sample_segments());
        player.set_metadata(62.0);
        controller.handle_metadata_loaded();
        (controller, player, calls)
    }

    #[test]
    fn test_mount_builds_one_region_per_segment() {
        let (controller, _player, _calls) = mounted_controller();
        assert_eq!(controller.phase(), LifecyclePhase::Mounted);
        assert!(controller.is_mounted());
        let regions = controller.regions();
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].width_percent, "32.26%");
        assert_eq!(regions[1].width_percent, "32.26%");
        assert_eq!(regions[2].width_percent, "35.48%");
        assert_eq!(regions[2].left_percent, "64.52%");
        assert!(regions.iter().all(|r| !r.hovered));
    }

    #[test]
    fn test_empty_segment_list_mounts_no_regions() {
        let (mut controller, player, _calls) = ready_controller(Vec::new());
        player.set_metadata(62.0);
        controller.handle_metadata_loaded();
        assert_eq!(controller.phase(), LifecyclePhase::Mounted);
        assert!(controller.regions().is_empty());
    }

    #[test]
    fn test_metadata_without_player_defers() {
        let mut controller = OverlayController::new(sample_segments());
        controller.handle_metadata_loaded();
        assert_eq!(controller.phase(), LifecyclePhase::Uninitialized);
        assert!(controller.regions().is_empty());
    }

    #[test]
    fn test_unknown_duration_defers_mount() {
        let (mut controller, _player, _calls) = ready_controller(sample_segments());
        controller.handle_metadata_loaded();
        assert_eq!(controller.phase(), LifecyclePhase::Ready);
        assert!(controller.regions().is_empty());
        assert!(!controller.is_mounted());
    }

    #[test]
    fn test_unmount_before_metadata_leaves_nothing() {
        let (mut controller, player, _calls) = ready_controller(sample_segments());
        controller.dispose();
        assert_eq!(controller.phase(), LifecyclePhase::Disposed);
        assert!(controller.regions().is_empty());

        // A late metadata event must not resurrect the overlay.
        player.set_metadata(62.0);
        controller.handle_metadata_loaded();
        assert!(controller.regions().is_empty());
        assert_eq!(controller.phase(), LifecyclePhase::Disposed);
    }

    #[test]
    fn test_hover_enter_keeps_single_region_active() {
        let (mut controller, _player, _calls) = mounted_controller();
        let first = controller.regions()[0].segment_id;
        let second = controller.regions()[1].segment_id;

        controller.pointer_enter(first);
        assert_eq!(controller.hovered_id(), Some(first));

        // Entering a second region without leaving the first still ends with
        // exactly one hovered region and one visible card.
        controller.pointer_enter(second);
        assert_eq!(controller.hovered_id(), Some(second));
        let hovered: Vec<_> = controller.regions().iter().filter(|r| r.hovered).collect();
        assert_eq!(hovered.len(), 1);
        assert_eq!(hovered[0].segment_id, second);
    }

    #[test]
    fn test_hover_leave_only_clears_own_region() {
        let (mut controller, _player, _calls) = mounted_controller();
        let first = controller.regions()[0].segment_id;
        let second = controller.regions()[1].segment_id;

        controller.pointer_enter(second);
        controller.pointer_leave(first);
        assert_eq!(controller.hovered_id(), Some(second));

        controller.pointer_leave(second);
        assert_eq!(controller.hovered_id(), None);
        assert!(controller.regions().iter().all(|r| !r.hovered));
    }

    #[test]
    fn test_track_seek_is_proportional_regardless_of_hover() {
        let (mut controller, _player, calls) = mounted_controller();
        let first = controller.regions()[0].segment_id;
        controller.pointer_enter(first);

        controller.track_seek(400.0, 800.0);
        controller.track_seek(0.0, 800.0);
        controller.track_seek(800.0, 800.0);
        assert_eq!(seeks(&calls), vec![31.0, 0.0, 62.0]);
    }

    #[test]
    fn test_track_seek_without_duration_is_noop() {
        let (controller, _player, calls) = ready_controller(sample_segments());
        controller.track_seek(400.0, 800.0);
        assert!(seeks(&calls).is_empty());
    }

    #[test]
    fn test_track_enter_over_background_seeks() {
        // Segments leave 20..40 and 60..100 uncovered.
        let segments = vec![
            Segment::new(0.0, 20.0, "a.png", "A"),
            Segment::new(40.0, 60.0, "b.png", "B"),
        ];
        let (mut controller, player, calls) = ready_controller(segments);
        player.set_metadata(100.0);
        controller.handle_metadata_loaded();

        controller.track_enter(240.0, 800.0);
        controller.track_enter(720.0, 800.0);
        assert_eq!(seeks(&calls), vec![30.0, 90.0]);
    }

    #[test]
    fn test_track_enter_over_region_is_noop() {
        let (controller, _player, calls) = mounted_controller();
        // 400/800 of 62s lands at 31s, inside the 20..40 segment. Entering
        // the bar there is hover territory, not a seek.
        controller.track_enter(400.0, 800.0);
        assert!(seeks(&calls).is_empty());

        // A click at the same spot still seeks unconditionally.
        controller.track_seek(400.0, 800.0);
        assert_eq!(seeks(&calls), vec![31.0]);
    }

    #[test]
    fn test_track_enter_without_duration_is_noop() {
        let (controller, _player, calls) = ready_controller(sample_segments());
        controller.track_enter(240.0, 800.0);
        assert!(seeks(&calls).is_empty());
    }

    #[test]
    fn test_card_seek_targets_segment_start() {
        let (controller, _player, calls) = mounted_controller();
        let second = controller.regions()[1].segment_id;
        controller.card_seek(second);
        // Exactly one seek: the card click never doubles as a track click.
        assert_eq!(seeks(&calls), vec![20.0]);
    }

    #[test]
    fn test_card_seek_for_unknown_segment_is_noop() {
        let (controller, _player, calls) = mounted_controller();
        controller.card_seek(Uuid::new_v4());
        assert!(seeks(&calls).is_empty());
    }

    #[test]
    fn test_repeated_metadata_does_not_duplicate_regions() {
        let (mut controller, _player, _calls) = mounted_controller();
        controller.handle_metadata_loaded();
        controller.handle_metadata_loaded();
        assert_eq!(controller.regions().len(), 3);
    }

    #[test]
    fn test_duration_change_recomputes_widths() {
        let (mut controller, player, _calls) = mounted_controller();
        player.set_metadata(124.0);
        controller.handle_metadata_loaded();
        assert_eq!(controller.regions().len(), 3);
        assert_eq!(controller.regions()[0].width_percent, "16.13%");
    }

    #[test]
    fn test_unchanged_segment_list_preserves_hover() {
        let (mut controller, _player, _calls) = mounted_controller();
        let first = controller.regions()[0].segment_id;
        controller.pointer_enter(first);

        let unchanged = controller.segments().to_vec();
        controller.set_segments(unchanged);
        assert_eq!(controller.hovered_id(), Some(first));
    }

    #[test]
    fn test_changed_segment_list_rebuilds_regions() {
        let (mut controller, _player, _calls) = mounted_controller();
        let replacement = vec![Segment::new(0.0, 62.0, "full.png", "Full clip")];
        controller.set_segments(replacement);
        assert_eq!(controller.regions().len(), 1);
        assert_eq!(controller.regions()[0].width_percent, "100.00%");
        assert_eq!(controller.hovered_id(), None);
    }

    #[test]
    fn test_out_of_range_segment_renders_clipped() {
        let segments = vec![Segment::new(50.0, 90.0, "tail.png", "Tail")];
        let (mut controller, player, _calls) = ready_controller(segments);
        player.set_metadata(62.0);
        controller.handle_metadata_loaded();
        assert_eq!(controller.regions().len(), 1);
        assert_eq!(controller.regions()[0].width_percent, "19.35%");
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let (mut controller, _player, _calls) = mounted_controller();
        controller.dispose();
        controller.dispose();
        assert_eq!(controller.phase(), LifecyclePhase::Disposed);
        assert!(controller.regions().is_empty());
        assert_eq!(controller.hovered_id(), None);
        assert!(!controller.is_mounted());
    }

    #[test]
    fn test_interactions_after_dispose_are_noops() {
        let (mut controller, _player, calls) = mounted_controller();
        let first = controller.regions()[0].segment_id;
        controller.dispose();

        controller.pointer_enter(first);
        controller.track_seek(400.0, 800.0);
        controller.card_seek(first);
        assert_eq!(controller.hovered_id(), None);
        assert!(seeks(&calls).is_empty());
    }
}
