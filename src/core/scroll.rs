//! Scroll telemetry and scroll commands shared by the engine and its consumers.
//!
//! The engine produces one [`ScrollSample`] per frame in which the page moved
//! and accepts [`ScrollCommands::scroll_to`] requests.  Consumers only ever see
//! this module, never the engine itself.

use std::time::Duration;

/// Sign of the instantaneous scroll delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    Idle,
}

impl Direction {
    /// Direction of a signed displacement.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::Forward
        } else if delta < 0.0 {
            Direction::Backward
        } else {
            Direction::Idle
        }
    }
}

/// One frame of scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Rows scrolled from the top, ≥ 0.
    pub scroll_offset: f64,
    /// Fraction of the scrollable distance, in `[0, 1]`.
    pub progress: f64,
    pub direction: Direction,
    /// Signed rows per 60 Hz frame.
    pub velocity: f64,
}

/// Where a programmatic scroll should land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget {
    /// Absolute document offset in rows.
    Offset(f64),
    /// The end of the document, whatever the current limit is.
    End,
}

/// Identifies an animation when it reports completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTag {
    /// Automatic bottom-snap.
    Snap,
    /// Explicit section navigation.
    Navigation,
    /// Plain jump (Home / End keys).
    Jump,
}

/// Easing curve mapping linear time `t ∈ [0, 1]` to progress.
pub type Easing = fn(f64) -> f64;

/// Exponential ease-out, clamped so it never overshoots 1.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Parameters of a programmatic scroll.
#[derive(Debug, Clone, Copy)]
pub struct ScrollOptions {
    pub duration: Duration,
    pub easing: Easing,
    /// Ignore user scroll input until the animation finishes.
    pub lock: bool,
    /// Replace an in-flight locked animation instead of being ignored.
    pub force: bool,
    /// Reported back by the engine once the animation reaches its target.
    pub on_complete: Option<ScrollTag>,
}

impl ScrollOptions {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            easing: ease_out_expo,
            lock: false,
            force: false,
            on_complete: None,
        }
    }

    pub fn lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn on_complete(mut self, tag: ScrollTag) -> Self {
        self.on_complete = Some(tag);
        self
    }
}

/// Anything that can carry out a programmatic scroll.
pub trait ScrollCommands {
    fn scroll_to(&mut self, target: ScrollTarget, options: ScrollOptions);
}
