//! Segment Player
//!
//! A desktop video player with a segment-annotated seek bar: the timeline is
//! divided into labeled regions that show a thumbnail card on hover and seek
//! on click.

mod app;
mod components;
mod constants;
mod player;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("segment_player=info")),
        )
        .init();

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Segment Player")
                .with_inner_size(LogicalSize::new(1024.0, 720.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
