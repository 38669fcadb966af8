//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{document::Document, engine::ScrollEngine, intent::ScrollIntentTracker};
use crate::ui::magnetic::MagneticOffset;
use crate::ui::navbar::NavHit;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Page,
    SettingsMenu,
    ControlsSubmenu,
}

/// Top-level application state.
pub struct AppState {
    /// Section layout for the current viewport.
    pub document: Document,
    /// Scroll position and programmatic scroll animations.
    pub engine: ScrollEngine,
    /// Header visibility + bottom-snap decisions.
    pub tracker: ScrollIntentTracker,
    /// Pointer-following drift of the nav items.
    pub magnetic: MagneticOffset,
    /// Nav item hit zones from the last frame (empty while the header is hidden).
    pub nav_hits: Vec<NavHit>,
    /// Full terminal area as of the last resize.
    pub terminal_area: Rect,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// User configuration (bindings + tuning).
    pub config: AppConfig,
    /// Write config changes back to disk.
    pub persist_config: bool,
    /// Currently highlighted item in the settings menu.
    pub settings_selected: usize,
    /// Currently highlighted item in the controls submenu.
    pub controls_selected: usize,
    /// When `true`, the controls submenu is waiting for the user to press
    /// a key to rebind the action at `controls_selected`.
    pub awaiting_rebind: bool,
    /// Frames rendered so far (drives the ticker marquee).
    pub frame_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let engine = ScrollEngine::new(config.engine.lerp);
        let tracker = ScrollIntentTracker::new(config.tracker_config());
        Self {
            document: Document::layout(0),
            engine,
            tracker,
            magnetic: MagneticOffset::new(2.0, 0.25),
            nav_hits: Vec::new(),
            terminal_area: Rect::default(),
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            config,
            persist_config: true,
            settings_selected: 0,
            controls_selected: 0,
            awaiting_rebind: false,
            frame_count: 0,
        }
    }

    /// Push tuning changes from `config` into the tracker and engine,
    /// then persist.
    pub fn apply_config(&mut self) {
        self.tracker.set_config(self.config.tracker_config());
        self.engine.set_lerp(self.config.engine.lerp);
        tracing::debug!(
            auto_snap = self.tracker.config().auto_snap,
            velocity_threshold = self.tracker.config().velocity_threshold,
            lerp = self.config.engine.lerp,
            "tuning applied"
        );
        if !self.persist_config {
            return;
        }
        if let Err(e) = self.config.save() {
            tracing::warn!("saving config failed: {e}");
            self.status_message = Some(format!("Could not save config: {e}"));
        }
    }
}
