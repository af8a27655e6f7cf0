//! Playback engine handle.
//!
//! Media decode and rendering live in the webview's native `<video>` element;
//! this module owns the narrow control surface the rest of the app is allowed
//! to touch: play/pause, duration, currentTime, dispose, and event
//! subscription. One `PlayerHandle` exists per mounted `VideoPlayer`; clones
//! share the same underlying player.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::constants::VIDEO_ELEMENT_ID;
use crate::state::PlayerOptions;

/// Events a player emits over its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerEvent {
    /// Media metadata, including duration, is available.
    LoadedMetadata,
    /// Playback stalled waiting for data.
    Waiting,
    /// The player was torn down. Fired exactly once.
    Dispose,
}

/// Control surface for the element actually playing media.
///
/// The production implementation injects JavaScript into the webview; tests
/// substitute a recording stub so playback behavior can be asserted without a
/// running document.
pub trait MediaSurface {
    fn play(&self);
    fn pause(&self);
    fn set_current_time(&self, seconds: f64);
    fn set_source(&self, src: &str);
    fn set_autoplay(&self, autoplay: bool);
    fn set_muted(&self, muted: bool);
}

/// Drives the `<video>` element identified by `VIDEO_ELEMENT_ID` with
/// fire-and-forget `document::eval` calls.
pub struct WebviewSurface;

impl WebviewSurface {
    fn run(&self, body: &str) {
        let js = format!(
            r#"const el = document.getElementById("{VIDEO_ELEMENT_ID}"); if (el) {{ {body} }}"#
        );
        let _ = dioxus::document::eval(&js);
    }
}

impl MediaSurface for WebviewSurface {
    fn play(&self) {
        self.run("el.play();");
    }

    fn pause(&self) {
        self.run("el.pause();");
    }

    fn set_current_time(&self, seconds: f64) {
        self.run(&format!("el.currentTime = {seconds};"));
    }

    fn set_source(&self, src: &str) {
        // JSON-encode so arbitrary URLs survive as a JS string literal.
        let literal = serde_json::to_string(src).unwrap_or_else(|_| "\"\"".to_string());
        self.run(&format!("el.src = {literal}; el.load();"));
    }

    fn set_autoplay(&self, autoplay: bool) {
        self.run(&format!("el.autoplay = {autoplay};"));
    }

    fn set_muted(&self, muted: bool) {
        self.run(&format!("el.muted = {muted};"));
    }
}

type Listener = Rc<dyn Fn()>;

struct PlayerInner {
    options: PlayerOptions,
    duration: Option<f64>,
    current_time: f64,
    playing: bool,
    disposed: bool,
    listeners: HashMap<PlayerEvent, Vec<Listener>>,
    surface: Box<dyn MediaSurface>,
}

/// Shared handle to one player instance.
///
/// Equality is pointer identity: the mount entry point relies on this to
/// recognize the player it already constructed across re-renders.
#[derive(Clone)]
pub struct PlayerHandle {
    inner: Rc<RefCell<PlayerInner>>,
}

impl PartialEq for PlayerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PlayerHandle {
    /// Construct a player over the given surface and push the initial
    /// configuration (source, autoplay, muted) down to it.
    pub fn new(options: PlayerOptions, surface: Box<dyn MediaSurface>) -> Self {
        if let Some(source) = options.primary_source() {
            surface.set_source(&source.src);
        }
        surface.set_autoplay(options.autoplay);
        surface.set_muted(options.muted);
        Self {
            inner: Rc::new(RefCell::new(PlayerInner {
                options,
                duration: None,
                current_time: 0.0,
                playing: false,
                disposed: false,
                listeners: HashMap::new(),
                surface,
            })),
        }
    }

    pub fn play(&self) {
        let inner = self.inner.borrow();
        if inner.disposed {
            return;
        }
        inner.surface.play();
    }

    pub fn pause(&self) {
        let inner = self.inner.borrow();
        if inner.disposed {
            return;
        }
        inner.surface.pause();
    }

    /// Duration in seconds; 0.0 until metadata has loaded.
    pub fn duration(&self) -> f64 {
        self.inner.borrow().duration.unwrap_or(0.0)
    }

    pub fn has_known_duration(&self) -> bool {
        self.inner.borrow().duration.is_some()
    }

    pub fn current_time(&self) -> f64 {
        self.inner.borrow().current_time
    }

    pub fn is_playing(&self) -> bool {
        self.inner.borrow().playing
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    /// Record the duration reported by loadedmetadata and notify listeners.
    /// Non-finite or non-positive values are ignored; the overlay keeps
    /// waiting for usable metadata.
    pub fn set_metadata(&self, duration: f64) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            if !duration.is_finite() || duration <= 0.0 {
                tracing::debug!(duration, "ignoring unusable duration from metadata");
                return;
            }
            inner.duration = Some(duration);
        }
        self.emit(PlayerEvent::LoadedMetadata);
    }

    /// Record the element's playback position, driven by timeupdate events.
    pub fn note_time(&self, seconds: f64) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed || !seconds.is_finite() {
            return;
        }
        inner.current_time = seconds.max(0.0);
    }

    /// Record the play/pause state reported by the element.
    pub fn note_playing(&self, playing: bool) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        inner.playing = playing;
    }

    /// Request a seek. A no-op while the duration is unknown or after
    /// dispose; targets outside the media clamp to its bounds.
    pub fn seek(&self, seconds: f64) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed || !seconds.is_finite() {
            return;
        }
        let Some(duration) = inner.duration else {
            tracing::debug!(seconds, "seek ignored: duration not yet known");
            return;
        };
        let clamped = seconds.clamp(0.0, duration);
        inner.surface.set_current_time(clamped);
        inner.current_time = clamped;
    }

    /// Apply a configuration change without rebuilding the player: only the
    /// affected element properties are updated.
    pub fn apply_options(&self, options: PlayerOptions) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed || inner.options == options {
            return;
        }
        if options.primary_source() != inner.options.primary_source() {
            if let Some(source) = options.primary_source() {
                inner.surface.set_source(&source.src);
            }
            // A new source invalidates the previously reported duration.
            inner.duration = None;
            inner.current_time = 0.0;
        }
        if options.autoplay != inner.options.autoplay {
            inner.surface.set_autoplay(options.autoplay);
        }
        if options.muted != inner.options.muted {
            inner.surface.set_muted(options.muted);
        }
        inner.options = options;
    }

    /// Subscribe to a player event. All listeners are dropped on dispose.
    pub fn on(&self, event: PlayerEvent, listener: impl Fn() + 'static) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        inner
            .listeners
            .entry(event)
            .or_default()
            .push(Rc::new(listener));
    }

    /// Fire all listeners for `event`. The list is snapshotted first so a
    /// listener may re-enter the handle without a double borrow.
    pub fn emit(&self, event: PlayerEvent) {
        let snapshot: Vec<Listener> = {
            let inner = self.inner.borrow();
            if inner.disposed {
                return;
            }
            inner.listeners.get(&event).cloned().unwrap_or_default()
        };
        for listener in snapshot {
            listener();
        }
    }

    /// Tear the player down. Idempotent: Dispose listeners fire once, then
    /// every listener is removed so nothing can call back into stale state.
    pub fn dispose(&self) {
        let dispose_listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            inner.playing = false;
            inner.surface.pause();
            let mut listeners = std::mem::take(&mut inner.listeners);
            listeners.remove(&PlayerEvent::Dispose).unwrap_or_default()
        };
        for listener in dispose_listeners {
            listener();
        }
        tracing::info!("player disposed");
    }

    /// Number of live event listeners, for lifecycle accounting.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.values().map(Vec::len).sum()
    }
}
