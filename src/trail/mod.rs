//! Cursor motion trail animation.

mod animator;
mod frame;

pub use animator::CursorTrail;
pub use frame::TrailFrame;
