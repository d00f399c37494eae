//! Voice similarity parameter.
//!
//! Controls how closely the synthesized voice sticks to the source voice.
//! Sent to the service as `similarity_boost`.

use serde::{Deserialize, Serialize};

/// Voice similarity setting between 0.0 and 1.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Similarity(f32);

impl Similarity {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;

    /// Create a new similarity value, clamped into `[MIN, MAX]`.
    pub fn new(value: f32) -> Self {
        Self(crate::clamp_unit(value, Self::MIN, Self::MAX))
    }

    /// Get the similarity value.
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Similarity {
    fn default() -> Self {
        Self(0.75)
    }
}

impl From<f32> for Similarity {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Similarity> for f32 {
    fn from(value: Similarity) -> Self {
        value.0
    }
}
