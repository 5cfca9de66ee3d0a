//! Rectangle and polygon types shared by the animator and its renderers.
//!
//! All coordinates live in the caller's space (typically pixels); nothing
//! here assumes an orientation for the y axis.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Four corners of a filled trail shape, in consistent winding order.
pub type TrailPolygon = [DVec2; 4];

/// Half-width of the resting mark, as a fraction of cursor width.
const RESTING_HALF_WIDTH: f64 = 0.10;
/// Half-height of the resting mark, as a fraction of cursor height.
const RESTING_HALF_HEIGHT: f64 = 0.3;
/// Smear thickness allowance for vertical-ish motion, fraction of height.
const SMEAR_HEIGHT_FACTOR: f64 = 0.35;
/// Cosmetic left bias applied to both smear ends, fraction of cursor width.
const SMEAR_OFFSET_X: f64 = -0.15;

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (non-negative).
    pub width: f64,
    /// Height (non-negative).
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle of `size` centered at `center`.
    #[must_use]
    pub fn from_center(center: DVec2, size: DVec2) -> Self {
        Self {
            x: center.x - size.x * 0.5,
            y: center.y - size.y * 0.5,
            width: size.x,
            height: size.y,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Width and height as a vector.
    #[must_use]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// Small axis-aligned mark shown when the trail rests on its target.
///
/// Corners run top-left, top-right, bottom-right, bottom-left.
#[must_use]
pub fn resting_polygon(center: DVec2, cursor_size: DVec2) -> TrailPolygon {
    let half_w = cursor_size.x * RESTING_HALF_WIDTH;
    let half_h = cursor_size.y * RESTING_HALF_HEIGHT;
    [
        DVec2::new(center.x - half_w, center.y - half_h),
        DVec2::new(center.x + half_w, center.y - half_h),
        DVec2::new(center.x + half_w, center.y + half_h),
        DVec2::new(center.x - half_w, center.y + half_h),
    ]
}

/// Quadrilateral smeared from `trail` to `target`.
///
/// `trail` and `target` must not coincide; callers fall back to
/// [`resting_polygon`] for near-zero distances. Mostly horizontal motion
/// gets a thin smear derived from cursor height, vertical motion a fuller
/// one of `trail_width * cursor width`.
#[must_use]
pub fn smear_polygon(
    trail: DVec2,
    target: DVec2,
    cursor_size: DVec2,
    trail_width: f64,
) -> TrailPolygon {
    let delta = target - trail;
    let perp = delta.perp() / delta.length();

    let thickness = if delta.x.abs() > delta.y.abs() {
        cursor_size.y * SMEAR_HEIGHT_FACTOR * 0.5
    } else {
        cursor_size.x * trail_width
    };
    let offset = DVec2::new(cursor_size.x * SMEAR_OFFSET_X, 0.0);
    let edge = perp * thickness;

    [
        trail - edge + offset,
        target - edge + offset,
        target + edge + offset,
        trail + edge + offset,
    ]
}
