//! Speaker boost parameter.

use serde::{Deserialize, Serialize};

/// Speaker boost toggle, sent as `use_speaker_boost`.
///
/// Boosts similarity to the original speaker at a small latency cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeakerBoost(bool);

impl SpeakerBoost {
    pub fn new(enabled: bool) -> Self {
        Self(enabled)
    }

    /// Check if speaker boost is enabled.
    pub fn is_enabled(&self) -> bool {
        self.0
    }
}

impl Default for SpeakerBoost {
    fn default() -> Self {
        Self(true)
    }
}

impl From<bool> for SpeakerBoost {
    fn from(enabled: bool) -> Self {
        Self(enabled)
    }
}
