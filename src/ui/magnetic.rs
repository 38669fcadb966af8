//! Column-level "magnetic" drift of the nav items toward the pointer.
//!
//! The pointer's horizontal position, normalised around the screen centre,
//! sets a target displacement of at most `max_cols`.  The rendered
//! displacement eases toward it exponentially, scaled by elapsed time so the
//! drift looks the same at any frame rate.

use std::time::Duration;

/// `speed` is defined per frame at this rate.
const REFERENCE_FPS: f64 = 60.0;

/// Pointer-following nav offset.
#[derive(Debug, Clone)]
pub struct MagneticOffset {
    /// Current displacement in columns.
    offset: f64,
    /// Where the pointer wants it.
    target: f64,
    /// Largest displacement either way.
    max_cols: f64,
    /// Fraction of the gap closed per 60 Hz frame.
    speed: f64,
}

impl MagneticOffset {
    pub fn new(max_cols: f64, speed: f64) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            max_cols: max_cols.max(0.0),
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Feed the pointer column within a screen `width` columns wide.
    pub fn set_pointer(&mut self, column: u16, width: u16) {
        if width == 0 {
            return;
        }
        let half = width as f64 / 2.0;
        let normalised = ((column as f64 - half) / half).clamp(-1.0, 1.0);
        self.target = normalised * self.max_cols;
    }

    /// Ease toward the target over `dt`.
    pub fn tick(&mut self, dt: Duration) {
        let frames = dt.as_secs_f64() * REFERENCE_FPS;
        let factor = 1.0 - (1.0 - self.speed).powf(frames);
        self.offset += (self.target - self.offset) * factor;
        if (self.target - self.offset).abs() < 0.05 {
            self.offset = self.target;
        }
    }

    /// Current displacement (integer columns).
    pub fn columns(&self) -> i16 {
        self.offset.round() as i16
    }
}
