//! Scroll-intent tracking: header visibility and momentum snap.
//!
//! The tracker watches every scroll sample and derives two decisions:
//!
//! * **header visibility** – the fixed header is hidden while the bottom of
//!   the viewport sits in a narrow band at the end of the terminal section
//!   (the contact footer), so the footer gets the whole screen;
//! * **bottom snap** – when the reader coasts into the last few percent of
//!   the page while heading down, the page finishes the trip on its own.
//!
//! The snap side is a small state machine:
//!
//! ```text
//!   Armed ──(coasting in zone / natural arrival)──▶ Snapped
//!   Snapped ──(backward scroll)──▶ Armed
//!   any ──(navigate_to_section)──▶ Suspended ──(navigation done)──▶ Armed
//! ```
//!
//! Explicit navigation suspends the snap entirely so the two never fight
//! over the scroll position.

use std::time::Duration;

use super::scroll::{Direction, ScrollCommands, ScrollOptions, ScrollSample, ScrollTag, ScrollTarget};

/// Read-only view of page geometry.
pub trait SectionGeometry {
    fn viewport_height(&self) -> f64;
    fn scroll_offset(&self) -> f64;
    /// Top edge of the section relative to the viewport top.
    fn bounding_top(&self, id: &str) -> Option<f64>;
    fn offset_height(&self, id: &str) -> Option<f64>;
}

/// Document-space placement of the terminal section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMetrics {
    pub top: f64,
    pub height: f64,
}

/// Tuning for the tracker.  Velocity is in scroll-engine units.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Section whose end hides the header (and which the snap lands on).
    pub terminal_section: String,
    /// Fraction of the terminal section after which the header hides.
    pub hide_start_fraction: f64,
    /// Progress at which the snap zone begins.
    pub snap_start: f64,
    /// Progress that counts as already at the end.
    pub already_there: f64,
    /// Speeds below this count as coasting.
    pub velocity_threshold: f64,
    pub snap_duration: Duration,
    pub navigate_duration: Duration,
    /// Master switch for the snap branch.
    pub auto_snap: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            terminal_section: "contact".into(),
            hide_start_fraction: 0.8,
            snap_start: 0.97,
            already_there: 0.997,
            velocity_threshold: 3.0,
            snap_duration: Duration::from_millis(1200),
            navigate_duration: Duration::from_millis(1500),
            auto_snap: true,
        }
    }
}

/// Snap sub-state, derived from the tracker flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapState {
    Armed,
    Snapped,
    Suspended,
}

impl SnapState {
    pub fn label(self) -> &'static str {
        match self {
            SnapState::Armed => "armed",
            SnapState::Snapped => "snapped",
            SnapState::Suspended => "nav",
        }
    }
}

/// What a single sample changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleOutcome {
    /// `header_hidden` flipped.
    pub header_changed: bool,
    /// A scroll-to-end command was issued.
    pub snapped: bool,
}

/// Derives header visibility and bottom-snap decisions from scroll samples.
#[derive(Debug, Clone)]
pub struct ScrollIntentTracker {
    config: TrackerConfig,
    metrics: Option<SectionMetrics>,
    viewport_height: f64,
    header_hidden: bool,
    has_auto_snapped: bool,
    /// Last non-idle direction; never `Idle`.
    last_intent: Direction,
    suspend_auto_snap: bool,
}

impl ScrollIntentTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            metrics: None,
            viewport_height: 0.0,
            header_hidden: false,
            has_auto_snapped: false,
            last_intent: Direction::Forward,
            suspend_auto_snap: false,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Replace the tuning.  Snap and header state carry over.
    pub fn set_config(&mut self, config: TrackerConfig) {
        self.config = config;
    }

    pub fn metrics(&self) -> Option<SectionMetrics> {
        self.metrics
    }

    pub fn header_hidden(&self) -> bool {
        self.header_hidden
    }

    pub fn has_auto_snapped(&self) -> bool {
        self.has_auto_snapped
    }

    pub fn is_suspended(&self) -> bool {
        self.suspend_auto_snap
    }

    pub fn last_intent(&self) -> Direction {
        self.last_intent
    }

    pub fn snap_state(&self) -> SnapState {
        if self.is_suspended() {
            SnapState::Suspended
        } else if self.has_auto_snapped() {
            SnapState::Snapped
        } else {
            SnapState::Armed
        }
    }

    /// Re-read terminal-section geometry.  Call at start-up and after every
    /// resize; nothing else refreshes it.
    pub fn update_metrics(&mut self, geometry: &impl SectionGeometry) {
        self.viewport_height = geometry.viewport_height();
        let id = self.config.terminal_section.as_str();
        let (Some(bounding_top), Some(height)) =
            (geometry.bounding_top(id), geometry.offset_height(id))
        else {
            tracing::debug!(section = id, "terminal section missing; metrics unchanged");
            return;
        };
        let metrics = SectionMetrics {
            top: (bounding_top + geometry.scroll_offset()).max(0.0),
            height: height.max(0.0),
        };
        tracing::debug!(top = metrics.top, height = metrics.height, "metrics updated");
        self.metrics = Some(metrics);
    }

    /// Feed one scroll sample.  May issue a single scroll-to-end command.
    pub fn on_scroll_sample(
        &mut self,
        sample: ScrollSample,
        commands: &mut impl ScrollCommands,
    ) -> SampleOutcome {
        let mut outcome = SampleOutcome::default();

        if sample.direction != Direction::Idle {
            self.last_intent = sample.direction;
        }

        if let Some(metrics) = self.metrics {
            let scroll_bottom = sample.scroll_offset + self.viewport_height;
            let hide_start = metrics.top + metrics.height * self.config.hide_start_fraction;
            let hide_end = metrics.top + metrics.height;
            let should_hide = scroll_bottom >= hide_start && scroll_bottom <= hide_end + 1.0;
            if should_hide != self.header_hidden {
                self.header_hidden = should_hide;
                outcome.header_changed = true;
            }
        }

        if self.suspend_auto_snap || !self.config.auto_snap {
            return outcome;
        }

        let progress = sample.progress.clamp(0.0, 1.0);
        let in_snap_zone = progress >= self.config.snap_start && progress < self.config.already_there;
        let moving_down_or_stopped = sample.direction == Direction::Forward
            || (sample.direction == Direction::Idle && self.last_intent == Direction::Forward);
        let coasting = sample.velocity.abs() < self.config.velocity_threshold;

        if in_snap_zone && !self.has_auto_snapped && moving_down_or_stopped && coasting {
            self.has_auto_snapped = true;
            tracing::debug!(progress, velocity = sample.velocity, "auto-snap to end");
            commands.scroll_to(
                ScrollTarget::End,
                ScrollOptions::new(self.config.snap_duration)
                    .lock(true)
                    .on_complete(ScrollTag::Snap),
            );
            outcome.snapped = true;
        }

        if sample.direction == Direction::Backward && self.has_auto_snapped {
            tracing::debug!("backward scroll re-armed snap");
            self.has_auto_snapped = false;
        }

        if progress >= self.config.already_there && !self.has_auto_snapped {
            self.has_auto_snapped = true;
        }

        outcome
    }

    /// Smooth-scroll to a section, suspending the snap until the scroll
    /// engine reports [`ScrollTag::Navigation`] complete.  Returns `false`
    /// (and changes nothing) when the section does not exist.
    pub fn navigate_to_section(
        &mut self,
        id: &str,
        geometry: &impl SectionGeometry,
        commands: &mut impl ScrollCommands,
    ) -> bool {
        let Some(bounding_top) = geometry.bounding_top(id) else {
            tracing::debug!(section = id, "navigate: no such section");
            return false;
        };
        let target = bounding_top + geometry.scroll_offset();
        self.suspend_auto_snap = true;
        tracing::debug!(section = id, target, "navigate");
        commands.scroll_to(
            ScrollTarget::Offset(target),
            ScrollOptions::new(self.config.navigate_duration)
                .lock(true)
                .force(true)
                .on_complete(ScrollTag::Navigation),
        );
        true
    }

    /// Completion callback from the scroll engine.
    pub fn on_scroll_complete(&mut self, tag: ScrollTag) {
        if tag == ScrollTag::Navigation && self.suspend_auto_snap {
            self.suspend_auto_snap = false;
            self.has_auto_snapped = false;
            tracing::debug!("navigation done; snap armed");
        }
    }
}
