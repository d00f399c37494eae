//! # ElevenLabs TTS Domain
//!
//! Value types shared by the `elevenlabs_tts` client: the bounded voice
//! settings, the options bag they are collected into, and model identifiers.

pub mod model_id;
pub mod similarity;
pub mod speaker_boost;
pub mod stability;
pub mod style_exaggeration;
pub mod synthesis_options;

pub use model_id::ModelId;
pub use similarity::Similarity;
pub use speaker_boost::SpeakerBoost;
pub use stability::Stability;
pub use style_exaggeration::StyleExaggeration;
pub use synthesis_options::SynthesisOptions;

/// Clamp into `[min, max]`, mapping `NaN` to `min`.
pub(crate) fn clamp_unit(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{ModelId, Similarity, SpeakerBoost, Stability, StyleExaggeration, SynthesisOptions};
}
