//! Text-to-speech model identifiers.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Model used for synthesis. Anything the service knows that is not listed
/// here can be passed through [`ModelId::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// Multilingual model v2.
    MultilingualV2,
    /// Flash model v2.5 (low latency).
    FlashV2_5,
    /// Turbo model v2.5 (balanced speed/quality).
    TurboV2_5,
    /// Eleven v3 model.
    ElevenV3,
    Custom(String),
}

impl ModelId {
    /// Wire identifier of the model, as the service expects it in `model_id`.
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::MultilingualV2 => "eleven_multilingual_v2",
            ModelId::FlashV2_5 => "eleven_flash_v2_5",
            ModelId::TurboV2_5 => "eleven_turbo_v2_5",
            ModelId::ElevenV3 => "eleven_v3",
            ModelId::Custom(id) => id,
        }
    }
}

impl Default for ModelId {
    fn default() -> Self {
        ModelId::MultilingualV2
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for ModelId {
    fn from(id: &str) -> Self {
        match id {
            "eleven_multilingual_v2" => ModelId::MultilingualV2,
            "eleven_flash_v2_5" => ModelId::FlashV2_5,
            "eleven_turbo_v2_5" => ModelId::TurboV2_5,
            "eleven_v3" => ModelId::ElevenV3,
            other => ModelId::Custom(other.to_string()),
        }
    }
}

impl Serialize for ModelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(ModelId::from(id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_to_variants() {
        assert_eq!(ModelId::from("eleven_flash_v2_5"), ModelId::FlashV2_5);
        assert_eq!(ModelId::TurboV2_5.to_string(), "eleven_turbo_v2_5");
    }

    #[test]
    fn unknown_ids_are_kept_verbatim() {
        let model = ModelId::from("model1");
        assert_eq!(model, ModelId::Custom("model1".into()));
        assert_eq!(serde_json::to_string(&model).unwrap(), "\"model1\"");
    }
}
