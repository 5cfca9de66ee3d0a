use serde::Serialize;

use crate::geometry::{Rect, TrailPolygon};

/// Everything a renderer needs to draw the trail for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailFrame {
    /// Timestamp of the observation this frame reflects.
    pub time_ms: u64,
    /// Whether the trail should be drawn at all.
    pub needs_render: bool,
    /// Trail opacity in `[0, 1]`.
    pub opacity: f64,
    /// Trail shape, in the caller's coordinate space.
    pub polygon: TrailPolygon,
    /// Latest cursor rectangle.
    pub cursor: Rect,
}
