//! Video player component.
//!
//! Owns the `<video>` element, the `PlayerHandle` driving it, and the
//! overlay controller for the segment track below it. The handle is built
//! exactly once per mount; re-renders reconcile option changes onto the
//! existing player instead of constructing a new one.

use dioxus::prelude::*;

use crate::constants::{BG_DEEPEST, BORDER_SUBTLE, VIDEO_ELEMENT_ID};
use crate::player::engine::{PlayerEvent, PlayerHandle, WebviewSurface};
use crate::player::overlay::OverlayController;
use crate::state::{PlayerOptions, Segment};

use super::playback_controls::PlaybackControls;
use super::segment_track::SegmentTrack;

#[component]
pub(crate) fn VideoPlayer(
    options: PlayerOptions,
    segments: Vec<Segment>,
    on_ready: EventHandler<PlayerHandle>,
) -> Element {
    let mut controller = use_signal(|| OverlayController::new(Vec::new()));
    let mut current_time = use_signal(|| 0.0_f64);
    let mut duration = use_signal(|| 0.0_f64);
    let mut is_playing = use_signal(|| false);

    // Constructed on the first render only. Later renders find the handle
    // already present and fall through to option reconciliation below.
    let player = use_hook(|| {
        let player = PlayerHandle::new(options.clone(), Box::new(WebviewSurface));
        let metadata_player = player.clone();
        player.on(PlayerEvent::LoadedMetadata, move || {
            // Signals are Copy; local rebinds keep this closure Fn.
            let mut duration = duration;
            let mut controller = controller;
            duration.set(metadata_player.duration());
            controller.write().handle_metadata_loaded();
        });
        player.on(PlayerEvent::Dispose, move || {
            let mut controller = controller;
            controller.write().dispose();
        });
        controller.write().attach_player(player.clone());
        tracing::info!("player is ready");
        on_ready.call(player.clone());
        player
    });

    player.apply_options(options.clone());

    // peek: an unchanged list must not dirty the signal, or every render
    // would schedule the next one.
    if controller.peek().segments() != segments.as_slice() {
        controller.write().set_segments(segments.clone());
    }

    use_drop({
        let player = player.clone();
        move || {
            if !player.is_disposed() {
                player.dispose();
            }
        }
    });

    let src = options
        .primary_source()
        .map(|source| source.src.clone())
        .unwrap_or_default();

    let metadata_player = player.clone();
    let time_player = player.clone();
    let play_player = player.clone();
    let pause_player = player.clone();
    let waiting_player = player.clone();
    let toggle_player = player.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px; background-color: {BG_DEEPEST}; border: 1px solid {BORDER_SUBTLE}; border-radius: 8px; padding: 12px;",

            video {
                id: VIDEO_ELEMENT_ID,
                style: "display: block; width: 100%; border-radius: 6px; background-color: #000;",
                src: "{src}",
                autoplay: options.autoplay,
                muted: options.muted,
                preload: "metadata",
                onloadedmetadata: move |_| {
                    let player = metadata_player.clone();
                    spawn(async move {
                        let js = format!(
                            r#"const el = document.getElementById("{VIDEO_ELEMENT_ID}"); return el && Number.isFinite(el.duration) ? el.duration : -1;"#
                        );
                        if let Ok(value) = document::eval(&js).await {
                            if let Some(reported) = value.as_f64() {
                                player.set_metadata(reported);
                            }
                        }
                    });
                },
                ontimeupdate: move |_| {
                    let player = time_player.clone();
                    spawn(async move {
                        let js = format!(
                            r#"const el = document.getElementById("{VIDEO_ELEMENT_ID}"); return el ? el.currentTime : 0;"#
                        );
                        if let Ok(value) = document::eval(&js).await {
                            if let Some(seconds) = value.as_f64() {
                                player.note_time(seconds);
                                current_time.set(seconds);
                            }
                        }
                    });
                },
                onplay: move |_| {
                    play_player.note_playing(true);
                    is_playing.set(true);
                },
                onpause: move |_| {
                    pause_player.note_playing(false);
                    is_playing.set(false);
                },
                onwaiting: move |_| {
                    waiting_player.emit(PlayerEvent::Waiting);
                },
            }

            SegmentTrack {
                controller,
                current_time: current_time(),
                duration: duration(),
            }

            if options.controls {
                PlaybackControls {
                    is_playing: is_playing(),
                    current_time: current_time(),
                    duration: duration(),
                    on_play_pause: move |_| {
                        if toggle_player.is_playing() {
                            toggle_player.pause();
                        } else {
                            toggle_player.play();
                        }
                    },
                    on_seek: {
                        let player = player.clone();
                        move |seconds| player.seek(seconds)
                    },
                }
            }
        }
    }
}
