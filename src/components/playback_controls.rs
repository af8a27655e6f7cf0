//! Transport row under the seek bar.

use dioxus::prelude::*;

use crate::constants::{BG_HOVER, TEXT_DIM, TEXT_MUTED};
use crate::utils::format_timecode;

/// Playback button
#[component]
fn PlaybackBtn(
    icon: &'static str,
    #[props(default = false)] primary: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let bg = if primary { BG_HOVER } else { "transparent" };
    rsx! {
        button {
            style: "width: 26px; height: 26px; border: none; border-radius: 4px; background-color: {bg}; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center; transition: all 0.12s ease;",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}

#[component]
pub(crate) fn PlaybackControls(
    is_playing: bool,
    current_time: f64,
    duration: f64,
    on_play_pause: EventHandler<MouseEvent>,
    on_seek: EventHandler<f64>,
) -> Element {
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let timecode = format!(
        "{} / {}",
        format_timecode(current_time),
        format_timecode(duration)
    );

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between;",

            div {
                style: "display: flex; align-items: center; gap: 4px;",
                PlaybackBtn {
                    icon: "⏮",
                    on_click: move |_| on_seek.call(0.0),
                }
                PlaybackBtn {
                    icon: play_icon,
                    primary: true,
                    on_click: move |e| on_play_pause.call(e),
                }
                PlaybackBtn {
                    icon: "⏭",
                    on_click: move |_| on_seek.call(duration),
                }
            }

            span {
                style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                "{timecode}"
            }
        }
    }
}
