//! Style exaggeration parameter.
//!
//! Amplifies the style of the original speaker. Anything above zero
//! costs extra latency on the service side, so the default is off.

use serde::{Deserialize, Serialize};

/// Style exaggeration setting between 0.0 and 1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct StyleExaggeration(f32);

impl StyleExaggeration {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;

    /// Create a new style exaggeration value.
    ///
    /// - 0.0 = no exaggeration
    /// - 1.0 = maximum exaggeration
    ///
    /// Values outside this range will be clamped.
    pub fn new(value: f32) -> Self {
        Self(crate::clamp_unit(value, Self::MIN, Self::MAX))
    }

    /// Get the style exaggeration value.
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl From<f32> for StyleExaggeration {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<StyleExaggeration> for f32 {
    fn from(value: StyleExaggeration) -> Self {
        value.0
    }
}
