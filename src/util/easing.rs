//! Easing helpers for time-based interpolation.
//!
//! The trail chases its target with an exponential ease-out parameterized by
//! elapsed seconds, so the same real-time interval always covers the same
//! fraction of the remaining distance regardless of frame rate.

use glam::DVec2;

/// Fraction of the remaining distance covered in `dt` seconds.
///
/// Computes `1 - 2^(-rate * dt / time_constant)`. For positive `rate` and
/// `dt` the result lies in `(0, 1)`, so a single step never overshoots.
#[inline]
#[must_use]
pub fn exp_decay_step(rate: f64, dt: f64, time_constant: f64) -> f64 {
    1.0 - (-rate * dt / time_constant).exp2()
}

/// Move `current` a fraction `step` of the way toward `target`.
#[inline]
#[must_use]
pub fn approach(current: DVec2, target: DVec2, step: f64) -> DVec2 {
    current + (target - current) * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_step_bounds() {
        let step = exp_decay_step(10.0, 0.016, 0.4);
        assert!(step > 0.0 && step < 1.0);
        assert_eq!(exp_decay_step(10.0, 0.0, 0.4), 0.0);
    }

    #[test]
    fn test_decay_step_one_time_constant_halves() {
        // rate * dt == time_constant covers exactly half the distance
        let step = exp_decay_step(1.0, 0.4, 0.4);
        assert!((step - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_decay_step_is_frame_rate_independent() {
        // Two 8ms steps must leave the same remainder as one 16ms step
        let half = exp_decay_step(10.0, 0.008, 0.4);
        let full = exp_decay_step(10.0, 0.016, 0.4);
        let remaining_split = (1.0 - half) * (1.0 - half);
        assert!((remaining_split - (1.0 - full)).abs() < 1e-12);
    }

    #[test]
    fn test_approach_moves_fraction() {
        let p = approach(DVec2::new(0.0, 0.0), DVec2::new(10.0, -4.0), 0.25);
        assert_eq!(p, DVec2::new(2.5, -1.0));
    }
}
