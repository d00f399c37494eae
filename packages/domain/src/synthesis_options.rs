//! Voice settings sent with every synthesis request.

use crate::{Similarity, SpeakerBoost, Stability, StyleExaggeration};
use serde::{Deserialize, Serialize};

/// Voice-tuning parameters serialized as `voice_settings`.
///
/// The fields are plain numbers so callers can fill them from any source.
/// Out-of-range values are never rejected: [`SynthesisOptions::clamp`] pulls
/// every bounded field back into `[0.0, 1.0]` and the client calls it before
/// each request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            stability: Stability::default().value(),
            similarity_boost: Similarity::default().value(),
            style: StyleExaggeration::default().value(),
            use_speaker_boost: SpeakerBoost::default().is_enabled(),
        }
    }
}

impl SynthesisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stability(mut self, stability: f32) -> Self {
        self.stability = Stability::new(stability).value();
        self
    }

    pub fn with_similarity(mut self, similarity: f32) -> Self {
        self.similarity_boost = Similarity::new(similarity).value();
        self
    }

    pub fn with_style(mut self, style: f32) -> Self {
        self.style = StyleExaggeration::new(style).value();
        self
    }

    pub fn with_speaker_boost(mut self, enabled: bool) -> Self {
        self.use_speaker_boost = SpeakerBoost::new(enabled).is_enabled();
        self
    }

    /// Force every bounded field into its valid range, in place.
    pub fn clamp(&mut self) {
        self.stability = Stability::new(self.stability).value();
        self.similarity_boost = Similarity::new(self.similarity_boost).value();
        self.style = StyleExaggeration::new(self.style).value();
    }

    /// Clamped copy of these options.
    pub fn clamped(mut self) -> Self {
        self.clamp();
        self
    }

    /// True when no bounded field is outside its range.
    pub fn is_clamped(&self) -> bool {
        *self == self.clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_out_of_range_fields_into_bounds() {
        let mut options = SynthesisOptions {
            stability: 1.5,
            similarity_boost: -0.25,
            style: 42.0,
            use_speaker_boost: false,
        };
        options.clamp();

        assert_eq!(options.stability, 1.0);
        assert_eq!(options.similarity_boost, 0.0);
        assert_eq!(options.style, 1.0);
        assert!(!options.use_speaker_boost);
    }

    #[test]
    fn clamp_leaves_in_range_fields_alone() {
        let options = SynthesisOptions {
            stability: 0.25,
            similarity_boost: 1.0,
            style: 0.0,
            use_speaker_boost: true,
        };
        assert!(options.is_clamped());
        assert_eq!(options.clamped(), options);
    }

    #[test]
    fn clamp_handles_non_finite_values() {
        let options = SynthesisOptions {
            stability: f32::NAN,
            similarity_boost: f32::INFINITY,
            style: f32::NEG_INFINITY,
            use_speaker_boost: true,
        }
        .clamped();

        assert_eq!(options.stability, 0.0);
        assert_eq!(options.similarity_boost, 1.0);
        assert_eq!(options.style, 0.0);
    }

    #[test]
    fn clamp_over_a_sweep_of_inputs() {
        let samples = [-10.0, -1.0, -0.0001, 0.0, 0.3, 0.5, 0.9999, 1.0, 1.0001, 7.5];
        for &value in &samples {
            let options = SynthesisOptions {
                stability: value,
                similarity_boost: value,
                style: value,
                use_speaker_boost: true,
            }
            .clamped();

            for field in [options.stability, options.similarity_boost, options.style] {
                assert!((0.0..=1.0).contains(&field), "{value} clamped to {field}");
                if (0.0..=1.0).contains(&value) {
                    assert_eq!(field, value);
                }
            }
        }
    }

    #[test]
    fn builder_setters_clamp_through_value_types() {
        let options = SynthesisOptions::new()
            .with_stability(3.0)
            .with_similarity(0.5)
            .with_style(-1.0)
            .with_speaker_boost(false);

        assert_eq!(options.stability, 1.0);
        assert_eq!(options.similarity_boost, 0.5);
        assert_eq!(options.style, 0.0);
        assert!(!options.use_speaker_boost);
    }

    #[test]
    fn serializes_with_service_field_names() {
        let json = serde_json::to_value(SynthesisOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stability": 0.5,
                "similarity_boost": 0.75,
                "style": 0.0,
                "use_speaker_boost": true,
            })
        );
    }
}
