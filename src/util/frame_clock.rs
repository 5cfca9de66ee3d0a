//! Millisecond timestamp source for driving the animator.

use web_time::Instant;

/// Millisecond timestamp source with FPS tracking.
///
/// Nothing in this crate reads a clock; this is the caller-side source of
/// the monotonically non-decreasing `now_ms` values that
/// [`CursorTrail::update`](crate::trail::CursorTrail::update) expects when
/// driving the animator from a live render loop.
///
/// ```
/// use cursor_trail::{
///     geometry::Rect, trail::CursorTrail, util::frame_clock::FrameClock,
/// };
///
/// let mut clock = FrameClock::new();
/// let mut trail = CursorTrail::new();
/// trail.update(Rect::new(0.0, 0.0, 10.0, 20.0), clock.tick());
/// assert!(trail.is_initialized());
/// ```
pub struct FrameClock {
    /// Epoch all timestamps are measured from
    epoch: Instant,
    /// Last timestamp handed out, in milliseconds
    last_ms: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Start a clock whose epoch is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            last_ms: 0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Advance to the current instant and return milliseconds since the
    /// epoch. Never returns less than the previous call.
    pub fn tick(&mut self) -> u64 {
        let now_ms = self.epoch.elapsed().as_millis() as u64;
        self.advance_to(now_ms)
    }

    /// Record a frame at `now_ms`, clamping so time never runs backward.
    fn advance_to(&mut self, now_ms: u64) -> u64 {
        let now_ms = now_ms.max(self.last_ms);
        let frame_time = (now_ms - self.last_ms) as f32 / 1000.0;
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.last_ms = now_ms;
        now_ms
    }

    /// Last timestamp returned by [`tick`](Self::tick).
    #[must_use]
    pub fn last_ms(&self) -> u64 {
        self.last_ms
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_never_decrease() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance_to(100), 100);
        assert_eq!(clock.advance_to(40), 100);
        assert_eq!(clock.last_ms(), 100);
        assert_eq!(clock.advance_to(116), 116);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let mut clock = FrameClock::new();
        let mut t = 0;
        for _ in 0..500 {
            t += 10;
            let _ = clock.advance_to(t);
        }
        assert!((clock.fps() - 100.0).abs() < 1.0);
    }

    #[test]
    fn tick_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(b >= a);
    }
}
