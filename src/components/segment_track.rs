//! Segment-annotated seek bar.
//!
//! Renders the track, the played-portion fill, and one region per segment
//! from the overlay controller's state. All interaction is forwarded to the
//! controller; this module holds no state of its own.

use dioxus::prelude::*;

use crate::constants::{
    ACCENT_VIDEO, BG_HOVER, BG_SURFACE, BORDER_DEFAULT, CARD_THUMB_HEIGHT_PX, CARD_WIDTH_PX,
    REGION_HOVER_OPACITY, REGION_IDLE_OPACITY, TEXT_PRIMARY, TRACK_ELEMENT_ID, TRACK_HEIGHT_PX,
};
use crate::player::overlay::{OverlayController, Region};
use crate::utils::format_timecode;

/// Measure the track in the document, then hand the pointer position to the
/// controller. The width is read on demand so window resizes never leave a
/// stale cached value behind.
fn seek_to_pointer(controller: Signal<OverlayController>, pointer_x: f64) {
    spawn(async move {
        let js = format!(
            r#"const el = document.getElementById("{TRACK_ELEMENT_ID}"); return el ? el.getBoundingClientRect().width : 0;"#
        );
        if let Ok(value) = document::eval(&js).await {
            if let Some(width) = value.as_f64() {
                controller.read().track_seek(pointer_x, width);
            }
        }
    });
}

/// Same measurement, but for pointer-enter: the controller only seeks when
/// the entry point is over bare background.
fn enter_at_pointer(controller: Signal<OverlayController>, pointer_x: f64) {
    spawn(async move {
        let js = format!(
            r#"const el = document.getElementById("{TRACK_ELEMENT_ID}"); return el ? el.getBoundingClientRect().width : 0;"#
        );
        if let Ok(value) = document::eval(&js).await {
            if let Some(width) = value.as_f64() {
                controller.read().track_enter(pointer_x, width);
            }
        }
    });
}

/// The seek bar with its segment regions and hover cards.
#[component]
pub(crate) fn SegmentTrack(
    controller: Signal<OverlayController>,
    current_time: f64,
    duration: f64,
) -> Element {
    let regions = controller.read().regions().to_vec();
    let played_percent = if duration > 0.0 {
        (current_time / duration).clamp(0.0, 1.0) * 100.0
    } else {
        0.0
    };

    rsx! {
        div {
            id: TRACK_ELEMENT_ID,
            style: "position: relative; height: {TRACK_HEIGHT_PX}px; background-color: {BG_HOVER}; border-radius: 4px; cursor: pointer;",
            onclick: move |e| {
                seek_to_pointer(controller, e.element_coordinates().x);
            },
            // Entering over bare background also jumps playback to the
            // pointer; the controller skips entries that land on a region,
            // since mouseenter fires here even then. mouseenter does not
            // bubble, so hovering a region afterwards never re-triggers this.
            onmouseenter: move |e| {
                enter_at_pointer(controller, e.element_coordinates().x);
            },

            // Played portion, under the regions.
            div {
                style: "position: absolute; left: 0; top: 0; bottom: 0; width: {played_percent}%; background-color: {ACCENT_VIDEO}; opacity: 0.3; border-radius: 4px; pointer-events: none;",
            }

            for region in regions {
                SegmentRegion {
                    key: "{region.segment_id}",
                    controller,
                    region: region.clone(),
                }
            }
        }
    }
}

/// One region on the track plus its hover card. The card stays in the tree
/// whenever the region does; hover only toggles its visibility.
#[component]
fn SegmentRegion(mut controller: Signal<OverlayController>, region: Region) -> Element {
    let segment_id = region.segment_id;
    let opacity = if region.hovered {
        REGION_HOVER_OPACITY
    } else {
        REGION_IDLE_OPACITY
    };
    let card_display = if region.hovered { "block" } else { "none" };
    let border = if region.hovered {
        "1px solid rgba(255, 255, 255, 0.6)"
    } else {
        "1px solid rgba(255, 255, 255, 0.25)"
    };
    let start_label = format_timecode(region.start);

    rsx! {
        div {
            style: "position: absolute; top: 0; bottom: 0; left: {region.left_percent}; width: {region.width_percent}; background-color: {ACCENT_VIDEO}; opacity: {opacity}; border: {border}; border-radius: 4px; box-sizing: border-box; transition: opacity 0.12s ease;",
            "data-segment": "{segment_id}",
            "data-start": "{region.start}",
            onmouseenter: move |_| controller.write().pointer_enter(segment_id),
            onmouseleave: move |_| controller.write().pointer_leave(segment_id),

            SegmentCard {
                thumbnail: region.thumbnail.clone(),
                description: region.description.clone(),
                start_label,
                display: card_display,
                on_click: move |e: MouseEvent| {
                    // The track must not also receive this click and run its
                    // own pointer-based seek.
                    e.stop_propagation();
                    controller.read().card_seek(segment_id);
                },
            }
        }
    }
}

/// Preview card floating above its region.
#[component]
fn SegmentCard(
    thumbnail: String,
    description: String,
    start_label: String,
    display: &'static str,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            style: "display: {display}; position: absolute; bottom: {TRACK_HEIGHT_PX + 8.0}px; left: 50%; transform: translateX(-50%); width: {CARD_WIDTH_PX}px; background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT}; border-radius: 6px; overflow: hidden; cursor: pointer; z-index: 10; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.5);",
            onclick: move |e| on_click.call(e),
            img {
                src: "{thumbnail}",
                alt: "{description}",
                style: "display: block; width: 100%; height: {CARD_THUMB_HEIGHT_PX}px; object-fit: cover; background-color: {BG_HOVER};",
            }
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 6px 8px;",
                span {
                    style: "font-size: 11px; color: {TEXT_PRIMARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{description}"
                }
                span {
                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 10px; color: {ACCENT_VIDEO}; margin-left: 8px;",
                    "{start_label}"
                }
            }
        }
    }
}
