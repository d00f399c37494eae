//! Async client for the ElevenLabs text-to-speech endpoints.
//!
//! Three entry points share one request builder and one response
//! interpreter: buffered synthesis, synthesis into a writer, and synthesis
//! on the streaming endpoint.
//!
//! # Usage
//!
//! ```no_run
//! use elevenlabs_tts::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> elevenlabs_tts::Result<()> {
//!     let client = ElevenLabsClient::from_env()?;
//!     let cancel = CancellationToken::new();
//!     let options = SynthesisOptions::new().with_stability(0.6);
//!
//!     let audio = client
//!         .text_to_speech(&cancel, "Hello from Rust!", "21m00Tcm4TlvDq8ikWAM", "eleven_multilingual_v2", options)
//!         .await?;
//!     elevenlabs_tts::utils::save("hello.mp3", &audio).await?;
//!
//!     let mut file = tokio::fs::File::create("stream.mp3").await?;
//!     client
//!         .text_to_speech_stream(&cancel, &mut file, "Streaming this one.", "21m00Tcm4TlvDq8ikWAM", options)
//!         .await?;
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod error;
mod response;
mod shared;
pub mod utils;

pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, ElevenLabsClient};
pub use elevenlabs_tts_domain::{
    ModelId, Similarity, SpeakerBoost, Stability, StyleExaggeration, SynthesisOptions,
};
pub use error::{Error, FieldError, Result, ValidationDetail, ValidationError};
pub use tokio_util::sync::CancellationToken;

pub mod prelude {
    pub use crate::endpoints::{TextToSpeech, TextToSpeechBody, TextToSpeechStream, TtsEndpoint};
    pub use crate::{
        CancellationToken, ClientConfig, ElevenLabsClient, Error, ModelId, SynthesisOptions,
        ValidationError,
    };
}
