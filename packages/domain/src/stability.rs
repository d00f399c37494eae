//! Voice stability parameter.
//!
//! Controls how consistent the voice stays across the generated audio.
//! Higher values trade expressiveness for consistency.

use serde::{Deserialize, Serialize};

/// Voice stability setting between 0.0 and 1.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Stability(f32);

impl Stability {
    /// Lowest accepted stability.
    pub const MIN: f32 = 0.0;
    /// Highest accepted stability.
    pub const MAX: f32 = 1.0;

    /// Create a new stability value.
    ///
    /// - 0.0 = minimal stability (more variation between generations)
    /// - 1.0 = maximum stability (monotone but predictable)
    ///
    /// Values outside this range are clamped, `NaN` becomes [`Stability::MIN`].
    pub fn new(value: f32) -> Self {
        Self(crate::clamp_unit(value, Self::MIN, Self::MAX))
    }

    /// Get the stability value.
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Stability {
    fn default() -> Self {
        Self(0.5)
    }
}

impl From<f32> for Stability {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Stability> for f32 {
    fn from(value: Stability) -> Self {
        value.0
    }
}
