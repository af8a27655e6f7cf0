//! Application root: sample segment data, player options, and the ready
//! callback wiring.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::video_player::VideoPlayer;
use crate::constants::{BG_DEEPEST, TEXT_MUTED, TEXT_PRIMARY};
use crate::player::engine::{PlayerEvent, PlayerHandle};
use crate::state::{validate_segments, PlayerOptions, Segment, Source};

const SAMPLE_VIDEO_URL: &str = "https://v1.cdnpk.net/videvo_files/video/premium/video0041/large_watermarked/900-2_900-6014-PD2_preview.mp4";

fn sample_segments() -> Vec<Segment> {
    vec![
        Segment::new(0.0, 20.0, "segment-1.png", "Segment 1"),
        Segment::new(20.0, 40.0, "segment-2.png", "Segment 2"),
        Segment::new(40.0, 62.0, "segment-3.png", "Segment 3"),
    ]
}

#[component]
pub fn App() -> Element {
    // Kept across re-renders so the ready callback has somewhere stable to
    // store the handle. Only the first VideoPlayer mount populates it.
    let player_ref = use_hook(|| Rc::new(RefCell::new(None::<PlayerHandle>)));

    let segments = use_hook(|| {
        let segments = sample_segments();
        if let Err(e) = validate_segments(&segments) {
            tracing::warn!("segment data rejected: {e}");
            return Vec::new();
        }
        segments
    });

    let options = PlayerOptions {
        autoplay: true,
        controls: true,
        // Webviews refuse unmuted autoplay.
        muted: true,
        sources: vec![Source::new(SAMPLE_VIDEO_URL, "video/mp4")],
    };

    let handle_player_ready = {
        let player_ref = Rc::clone(&player_ref);
        move |player: PlayerHandle| {
            player.on(PlayerEvent::Waiting, || {
                tracing::info!("player is waiting");
            });
            player.on(PlayerEvent::Dispose, || {
                tracing::info!("player will dispose");
            });
            *player_ref.borrow_mut() = Some(player);
        }
    };

    rsx! {
        div {
            style: "min-height: 100vh; background-color: {BG_DEEPEST}; padding: 24px; font-family: -apple-system, 'Segoe UI', sans-serif;",

            div {
                style: "max-width: 960px; margin: 0 auto; display: flex; flex-direction: column; gap: 16px;",

                div {
                    h1 {
                        style: "margin: 0; font-size: 18px; font-weight: 600; color: {TEXT_PRIMARY};",
                        "Segment Player"
                    }
                    p {
                        style: "margin: 4px 0 0; font-size: 12px; color: {TEXT_MUTED};",
                        "Hover the seek bar for segment previews; click a card to jump to its start."
                    }
                }

                VideoPlayer {
                    options,
                    segments,
                    on_ready: handle_player_ready,
                }
            }
        }
    }
}
