//! Shared utilities for the trail animator.
//!
//! Helpers for frame timing and time-based easing.

pub mod easing;
pub mod frame_clock;
