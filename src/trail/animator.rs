//! Cursor trail state machine.

use glam::DVec2;

use super::frame::TrailFrame;
use crate::geometry::{resting_polygon, smear_polygon, Rect, TrailPolygon};
use crate::options::TrailOptions;
use crate::util::easing::{approach, exp_decay_step};

/// Moves longer than this re-trigger a visible trail.
const JUMP_THRESHOLD: f64 = 5.0;
/// Moves longer than this many cursor widths re-anchor the trail instantly.
const LARGE_JUMP_WIDTHS: f64 = 3.0;
/// Trail-to-target distance below which the trail counts as caught up.
const CATCH_UP_DISTANCE: f64 = 1.0;
/// Time constant of the exponential chase, in seconds.
const DECAY_TIME_CONSTANT: f64 = 0.4;
/// Opacity at or below which the trail is no longer worth drawing.
const RENDER_EPSILON: f64 = 0.01;
/// Trail-to-target distance below which the resting mark is drawn.
const RESTING_DISTANCE: f64 = 0.1;
/// Longest tick, in seconds, the animation will advance across.
const MAX_TICK_SECONDS: f64 = 1.0;

/// Animates a motion smear that chases a moving cursor rectangle.
///
/// Feed one observation per display frame through [`update`](Self::update),
/// then read [`needs_render`](Self::needs_render),
/// [`opacity`](Self::opacity) and [`trail_polygon`](Self::trail_polygon) to
/// draw. All timing comes from the caller's timestamps, so the animator
/// never reads a clock and never blocks.
///
/// Each instance tracks exactly one cursor; independent cursors (e.g. split
/// panes) each get their own animator.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorTrail {
    /// Size of the most recently observed cursor rectangle.
    cursor_size: DVec2,
    /// Center of the most recently observed cursor rectangle.
    target: DVec2,
    /// Center of the rendered trail, chasing `target`.
    trail: DVec2,
    /// Timestamp of the previous observation; `None` until initialized.
    last_update_ms: Option<u64>,
    /// Current trail visibility in `[0, 1]`.
    opacity: f64,
    needs_render: bool,
    animation_speed: f64,
    fade_speed: f64,
    trail_width: f64,
}

impl CursorTrail {
    /// Create an idle animator with default tunables.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&TrailOptions::default())
    }

    /// Create an idle animator using the given tunables as-is.
    #[must_use]
    pub fn with_options(options: &TrailOptions) -> Self {
        Self {
            cursor_size: DVec2::ZERO,
            target: DVec2::ZERO,
            trail: DVec2::ZERO,
            last_update_ms: None,
            opacity: 0.0,
            needs_render: false,
            animation_speed: options.animation_speed,
            fade_speed: options.fade_speed,
            trail_width: options.trail_width,
        }
    }

    /// Advance the animation with the cursor observed at `now_ms`.
    ///
    /// `now_ms` must be non-decreasing between calls. The first call after
    /// construction or [`reset`](Self::reset) only snaps to the cursor and
    /// draws nothing. Ticks that go backward in time or span more than a
    /// second record the new target but do not advance the trail.
    pub fn update(&mut self, cursor: Rect, now_ms: u64) {
        self.cursor_size = cursor.size();
        let new_target = cursor.center();

        let Some(last_ms) = self.last_update_ms else {
            self.target = new_target;
            self.trail = new_target;
            self.last_update_ms = Some(now_ms);
            self.opacity = 0.0;
            self.needs_render = false;
            return;
        };

        let movement = new_target - self.target;
        let move_distance = movement.length();
        // A gap left by a skipped tick is still pending and must be chased
        let resting = !self.needs_render
            && self.trail.distance(self.target) <= CATCH_UP_DISTANCE;

        self.target = new_target;
        let dt = (now_ms as f64 - last_ms as f64) / 1000.0;
        self.last_update_ms = Some(now_ms);

        if dt <= 0.0 || dt > MAX_TICK_SECONDS {
            log::trace!("Skipping trail tick with dt = {dt}s");
            return;
        }

        if move_distance > JUMP_THRESHOLD {
            if move_distance > self.cursor_size.x * LARGE_JUMP_WIDTHS {
                // Start from where the cursor was, not from a stale trail
                self.trail = new_target - movement;
            }
            log::trace!("Cursor jumped {move_distance:.1}, showing trail");
            self.opacity = 1.0;
            self.needs_render = true;
        } else if resting {
            // Small moves from rest do not start a trail
            self.trail = new_target;
        }

        self.step(dt);
    }

    /// Chase the target, or fade out once caught up.
    fn step(&mut self, dt: f64) {
        let distance = self.trail.distance(self.target);
        if distance > CATCH_UP_DISTANCE {
            let step =
                exp_decay_step(self.animation_speed, dt, DECAY_TIME_CONSTANT);
            self.trail = approach(self.trail, self.target, step);
            self.opacity = 1.0;
            self.needs_render = true;
        } else {
            self.opacity = (self.opacity - dt * self.fade_speed).clamp(0.0, 1.0);
            self.needs_render = self.opacity > RENDER_EPSILON;
        }
    }

    /// Return to the never-initialized state, keeping the tunables.
    ///
    /// The next [`update`](Self::update) snaps to the cursor again.
    pub fn reset(&mut self) {
        self.cursor_size = DVec2::ZERO;
        self.target = DVec2::ZERO;
        self.trail = DVec2::ZERO;
        self.last_update_ms = None;
        self.opacity = 0.0;
        self.needs_render = false;
    }

    /// Whether the caller should draw the trail this frame.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Current trail opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Latest cursor rectangle, centered on the target.
    #[must_use]
    pub fn cursor_rect(&self) -> Rect {
        Rect::from_center(self.target, self.cursor_size)
    }

    /// Quadrilateral spanning from the trail to the target.
    ///
    /// When the trail sits on the target a small resting mark centered on
    /// the trail is returned instead.
    #[must_use]
    pub fn trail_polygon(&self) -> TrailPolygon {
        if self.trail.distance(self.target) < RESTING_DISTANCE {
            resting_polygon(self.trail, self.cursor_size)
        } else {
            smear_polygon(
                self.trail,
                self.target,
                self.cursor_size,
                self.trail_width,
            )
        }
    }

    /// Snapshot of everything a renderer needs for one frame.
    #[must_use]
    pub fn frame(&self) -> TrailFrame {
        TrailFrame {
            time_ms: self.last_update_ms.unwrap_or_default(),
            needs_render: self.needs_render,
            opacity: self.opacity,
            polygon: self.trail_polygon(),
            cursor: self.cursor_rect(),
        }
    }

    /// Center of the rendered trail.
    #[must_use]
    pub fn trail_center(&self) -> DVec2 {
        self.trail
    }

    /// Center of the latest observed cursor.
    #[must_use]
    pub fn target_center(&self) -> DVec2 {
        self.target
    }

    /// Whether an observation has been recorded since construction or reset.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.last_update_ms.is_some()
    }

    /// Set the chase rate. Not validated; takes effect on the next update.
    pub fn set_animation_speed(&mut self, speed: f64) {
        self.animation_speed = speed;
    }

    /// Set the fade rate. Not validated; takes effect on the next update.
    pub fn set_fade_speed(&mut self, speed: f64) {
        self.fade_speed = speed;
    }

    /// Set the vertical smear width factor. Not validated.
    pub fn set_trail_width(&mut self, width: f64) {
        self.trail_width = width;
    }

    /// Apply all tunables from `options` at once.
    pub fn apply_options(&mut self, options: &TrailOptions) {
        self.set_animation_speed(options.animation_speed);
        self.set_fade_speed(options.fade_speed);
        self.set_trail_width(options.trail_width);
    }

    /// Current chase rate.
    #[must_use]
    pub fn animation_speed(&self) -> f64 {
        self.animation_speed
    }

    /// Current fade rate.
    #[must_use]
    pub fn fade_speed(&self) -> f64 {
        self.fade_speed
    }

    /// Current vertical smear width factor.
    #[must_use]
    pub fn trail_width(&self) -> f64 {
        self.trail_width
    }
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}
