//! Text-to-speech endpoints.
//!
//! ```text
//! POST /v1/text-to-speech/:voice_id
//! POST /v1/text-to-speech/:voice_id/stream
//! ```
//!
//! Both take the same JSON body and answer `200` with `audio/mpeg` bytes.

use super::*;
use elevenlabs_tts_domain::SynthesisOptions;
use serde::Serialize;

/// JSON body shared by both synthesis endpoints.
///
/// Voice settings are clamped whenever they are set, so a body can never be
/// serialized with out-of-range values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextToSpeechBody {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_id: Option<String>,
    voice_settings: SynthesisOptions,
}

impl TextToSpeechBody {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: None,
            voice_settings: SynthesisOptions::default(),
        }
    }

    /// Set the model. An empty id leaves the field out of the payload.
    pub fn with_model_id(mut self, model_id: impl AsRef<str>) -> Self {
        let model_id = model_id.as_ref();
        self.model_id = (!model_id.is_empty()).then(|| model_id.to_string());
        self
    }

    pub fn with_voice_settings(mut self, options: SynthesisOptions) -> Self {
        self.voice_settings = options.clamped();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }

    pub fn voice_settings(&self) -> &SynthesisOptions {
        &self.voice_settings
    }
}

/// Converts text into speech and returns the audio once fully generated.
///
/// # Example
/// ```no_run
/// use elevenlabs_tts::prelude::*;
///
/// # async fn run() -> elevenlabs_tts::Result<()> {
/// let client = ElevenLabsClient::from_env()?;
/// let body = TextToSpeechBody::new("Hello there").with_model_id(ModelId::FlashV2_5);
/// let audio = client
///     .hit(&CancellationToken::new(), TextToSpeech::new("21m00Tcm4TlvDq8ikWAM", body))
///     .await?;
/// elevenlabs_tts::utils::save("hello.mp3", &audio).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TextToSpeech {
    voice_id: String,
    body: TextToSpeechBody,
}

impl TextToSpeech {
    pub fn new(voice_id: impl Into<String>, body: TextToSpeechBody) -> Self {
        Self {
            voice_id: voice_id.into(),
            body,
        }
    }
}

impl TtsEndpoint for TextToSpeech {
    const PATH: &'static str = "/v1/text-to-speech/:voice_id";

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![self.voice_id.and_param(PathParam::VoiceID)]
    }

    fn request_body(&self) -> &TextToSpeechBody {
        &self.body
    }
}

/// Converts text into speech on the streaming endpoint, which starts sending
/// audio before generation has finished.
///
/// The model id is left out of the payload unless [`with_model_id`] is called.
///
/// [`with_model_id`]: TextToSpeechStream::with_model_id
#[derive(Clone, Debug)]
pub struct TextToSpeechStream {
    voice_id: String,
    body: TextToSpeechBody,
}

impl TextToSpeechStream {
    pub fn new(voice_id: impl Into<String>, body: TextToSpeechBody) -> Self {
        Self {
            voice_id: voice_id.into(),
            body,
        }
    }

    pub fn with_model_id(mut self, model_id: impl AsRef<str>) -> Self {
        self.body = self.body.with_model_id(model_id);
        self
    }
}

impl TtsEndpoint for TextToSpeechStream {
    const PATH: &'static str = "/v1/text-to-speech/:voice_id/stream";

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![self.voice_id.and_param(PathParam::VoiceID)]
    }

    fn request_body(&self) -> &TextToSpeechBody {
        &self.body
    }
}
