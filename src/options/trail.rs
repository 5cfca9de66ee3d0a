use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Cursor Trail", inline)]
#[serde(default)]
/// Tunable speed and shape parameters for the cursor trail.
pub struct TrailOptions {
    /// Chase rate; higher values make the trail catch up faster.
    #[schemars(title = "Animation Speed", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub animation_speed: f64,
    /// Opacity lost per second once the trail has caught up.
    #[schemars(title = "Fade Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub fade_speed: f64,
    /// Smear thickness for vertical motion, as a fraction of cursor width.
    #[schemars(title = "Trail Width", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub trail_width: f64,
}

impl TrailOptions {
    /// Default chase rate.
    pub const DEFAULT_ANIMATION_SPEED: f64 = 10.0;
    /// Default fade rate.
    pub const DEFAULT_FADE_SPEED: f64 = 1.5;
    /// Default vertical smear width factor.
    pub const DEFAULT_TRAIL_WIDTH: f64 = 0.4;

    /// Copy with every non-finite or non-positive value replaced by its
    /// default.
    ///
    /// The animator accepts any value it is given; this is the
    /// configuration-boundary check for settings coming from files or UIs.
    #[must_use]
    pub fn validated(&self) -> Self {
        Self {
            animation_speed: positive_or(
                "animation_speed",
                self.animation_speed,
                Self::DEFAULT_ANIMATION_SPEED,
            ),
            fade_speed: positive_or(
                "fade_speed",
                self.fade_speed,
                Self::DEFAULT_FADE_SPEED,
            ),
            trail_width: positive_or(
                "trail_width",
                self.trail_width,
                Self::DEFAULT_TRAIL_WIDTH,
            ),
        }
    }
}

impl Default for TrailOptions {
    fn default() -> Self {
        Self {
            animation_speed: Self::DEFAULT_ANIMATION_SPEED,
            fade_speed: Self::DEFAULT_FADE_SPEED,
            trail_width: Self::DEFAULT_TRAIL_WIDTH,
        }
    }
}

fn positive_or(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Rejected trail option {name} = {value}, using {fallback}");
        fallback
    }
}
