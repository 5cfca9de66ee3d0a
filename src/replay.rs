//! Headless replay of recorded cursor observations.
//!
//! A replay script is a TOML file with an optional `[trail]` table of
//! tunables followed by `[[observations]]` entries:
//!
//! ```toml
//! [trail]
//! fade_speed = 2.0
//!
//! [[observations]]
//! t_ms = 1000
//! x = 0.0
//! y = 0.0
//! width = 10.0
//! height = 20.0
//! ```

use std::io::Write;
use std::path::Path;

use serde::Deserialize;

use crate::error::TrailError;
use crate::geometry::Rect;
use crate::options::TrailOptions;
use crate::trail::{CursorTrail, TrailFrame};

/// Interval between synthesized frames in the built-in demo.
const DEMO_FRAME_MS: u64 = 16;

/// One timestamped cursor rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Observation {
    /// Timestamp in milliseconds.
    pub t_ms: u64,
    /// Left edge of the cursor.
    pub x: f64,
    /// Top edge of the cursor.
    pub y: f64,
    /// Cursor width.
    pub width: f64,
    /// Cursor height.
    pub height: f64,
}

impl Observation {
    /// Cursor rectangle of this observation.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Tunables plus the observations to feed, in order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ReplayScript {
    /// Trail tunables; validated before use.
    pub trail: TrailOptions,
    /// Observations in timestamp order.
    pub observations: Vec<Observation>,
}

impl ReplayScript {
    /// Load a script from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid script.
    pub fn load(path: &Path) -> Result<Self, TrailError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a script from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::ScriptParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, TrailError> {
        toml::from_str(content)
            .map_err(|e| TrailError::ScriptParse(e.to_string()))
    }

    /// Built-in path: rest, jump a word to the right, rest, jump down a
    /// line, then rest until the trail fades.
    #[must_use]
    pub fn demo() -> Self {
        let stops = [(0.0, 0.0, 10), (60.0, 0.0, 30), (60.0, 20.0, 70)];
        let mut observations = Vec::new();
        let mut t_ms = 1000;
        for (x, y, frames) in stops {
            for _ in 0..frames {
                observations.push(Observation {
                    t_ms,
                    x,
                    y,
                    width: 10.0,
                    height: 20.0,
                });
                t_ms += DEMO_FRAME_MS;
            }
        }
        Self {
            trail: TrailOptions::default(),
            observations,
        }
    }
}

/// Feed every observation through a fresh animator and collect one frame
/// per observation.
#[must_use]
pub fn run(script: &ReplayScript) -> Vec<TrailFrame> {
    let mut trail = CursorTrail::with_options(&script.trail.validated());
    script
        .observations
        .iter()
        .map(|obs| {
            trail.update(obs.rect(), obs.t_ms);
            trail.frame()
        })
        .collect()
}

/// Write frames as JSON lines.
///
/// # Errors
///
/// Fails if a frame cannot be encoded or the writer fails.
pub fn write_json_lines<W: Write>(
    out: &mut W,
    frames: &[TrailFrame],
) -> Result<(), TrailError> {
    for frame in frames {
        serde_json::to_writer(&mut *out, frame)
            .map_err(|e| TrailError::Output(e.to_string()))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
