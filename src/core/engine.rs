//! Row-level smooth scroll engine.
//!
//! User input moves a *target*; the rendered position chases it with
//! frame-rate independent exponential smoothing, so a burst of wheel ticks
//! decays into a visible coast.  Programmatic scrolls run a timed, eased
//! animation instead and may lock out user input until they land.

use std::time::Duration;

use super::scroll::{Direction, ScrollCommands, ScrollOptions, ScrollSample, ScrollTag, ScrollTarget};

/// Distance (rows) under which smoothing snaps onto the target.
const SETTLE_ROWS: f64 = 0.05;

/// Reference frame rate that `lerp` and velocity are expressed in.
const REFERENCE_FPS: f64 = 60.0;

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f64,
    to: ScrollTarget,
    elapsed: Duration,
    options: ScrollOptions,
}

/// Result of advancing the engine by one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frame {
    /// Present when the page moved this frame, plus one trailing `Idle`
    /// sample on the frame motion stopped.
    pub sample: Option<ScrollSample>,
    /// Tag of a programmatic scroll that reached its target this frame.
    pub completed: Option<ScrollTag>,
}

/// Smooth scroll engine over a document of `limit + viewport` rows.
#[derive(Debug, Clone)]
pub struct ScrollEngine {
    /// Rendered position.
    animated: f64,
    /// Position user input is heading for.
    target: f64,
    /// Largest reachable offset (document height − viewport height).
    limit: f64,
    /// Fraction of the remaining distance covered per reference frame.
    lerp: f64,
    velocity: f64,
    direction: Direction,
    animation: Option<Animation>,
    /// Whether the previous frame moved (drives the trailing idle sample).
    moving: bool,
}

impl ScrollEngine {
    pub fn new(lerp: f64) -> Self {
        Self {
            animated: 0.0,
            target: 0.0,
            limit: 0.0,
            lerp: lerp.clamp(0.01, 1.0),
            velocity: 0.0,
            direction: Direction::Idle,
            animation: None,
            moving: false,
        }
    }

    /// Update the scrollable distance after a relayout.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.animated = self.animated.clamp(0.0, self.limit);
        self.target = self.target.clamp(0.0, self.limit);
    }

    pub fn set_lerp(&mut self, lerp: f64) {
        self.lerp = lerp.clamp(0.01, 1.0);
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Rendered position in rows.
    pub fn offset(&self) -> f64 {
        self.animated
    }

    pub fn progress(&self) -> f64 {
        if self.limit <= 0.0 {
            1.0
        } else {
            (self.animated / self.limit).clamp(0.0, 1.0)
        }
    }

    /// True while a programmatic scroll that locks user input is in flight.
    pub fn is_locked(&self) -> bool {
        self.animation.is_some_and(|a| a.options.lock)
    }

    /// True when anything is still moving.
    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some() || self.animated != self.target
    }

    /// Current state as a sample (used after relayout, when no motion
    /// would otherwise produce one).
    pub fn sample(&self) -> ScrollSample {
        ScrollSample {
            scroll_offset: self.animated,
            progress: self.progress(),
            direction: self.direction,
            velocity: self.velocity,
        }
    }

    /// Apply user scroll input.  Returns `false` when the input was swallowed
    /// by a locked animation.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        if self.is_locked() {
            return false;
        }
        if self.animation.take().is_some() {
            tracing::debug!("user input interrupted programmatic scroll");
            self.target = self.animated;
        }
        self.target = (self.target + delta).clamp(0.0, self.limit);
        true
    }

    /// Advance by `dt`.  Call once per frame.
    pub fn tick(&mut self, dt: Duration) -> Frame {
        let previous = self.animated;
        let mut completed = None;

        if let Some(mut anim) = self.animation.take() {
            anim.elapsed += dt;
            let to = resolve(anim.to, self.limit);
            let t = if anim.options.duration.is_zero() {
                1.0
            } else {
                (anim.elapsed.as_secs_f64() / anim.options.duration.as_secs_f64()).min(1.0)
            };
            if t >= 1.0 {
                self.animated = to;
                completed = anim.options.on_complete;
            } else {
                self.animated = anim.from + (to - anim.from) * (anim.options.easing)(t);
                self.animation = Some(anim);
            }
            self.target = self.animated;
        } else {
            let frames = dt.as_secs_f64() * REFERENCE_FPS;
            let factor = 1.0 - (1.0 - self.lerp).powf(frames);
            self.animated += (self.target - self.animated) * factor;
            if (self.target - self.animated).abs() < SETTLE_ROWS {
                self.animated = self.target;
            }
        }

        let delta = self.animated - previous;
        let moved = delta != 0.0;
        let frames = (dt.as_secs_f64() * REFERENCE_FPS).max(f64::EPSILON);
        self.velocity = if moved { delta / frames } else { 0.0 };
        self.direction = Direction::from_delta(delta);

        let sample = (moved || self.moving).then(|| self.sample());
        self.moving = moved;

        Frame { sample, completed }
    }
}

impl ScrollCommands for ScrollEngine {
    fn scroll_to(&mut self, target: ScrollTarget, options: ScrollOptions) {
        if self.is_locked() && !options.force {
            tracing::debug!(?target, "scroll_to ignored: locked animation in flight");
            return;
        }
        if let Some(old) = self.animation {
            tracing::debug!(replaced = ?old.options.on_complete, "scroll_to replaces animation");
        }
        self.animation = Some(Animation {
            from: self.animated,
            to: target,
            elapsed: Duration::ZERO,
            options,
        });
    }
}

fn resolve(target: ScrollTarget, limit: f64) -> f64 {
    match target {
        ScrollTarget::Offset(rows) => rows.clamp(0.0, limit),
        ScrollTarget::End => limit,
    }
}
