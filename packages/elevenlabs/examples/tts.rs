//! Synthesizes a sentence with both endpoints and saves the results.
//!
//! ```text
//! ELEVENLABS_API_KEY=... cargo run -p elevenlabs_tts --example tts -- "Hello there"
//! ```

use elevenlabs_tts::prelude::*;
use tracing::info;

const RACHEL: &str = "21m00Tcm4TlvDq8ikWAM";

#[tokio::main]
async fn main() -> elevenlabs_tts::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elevenlabs_tts=debug,tts=info".into()),
        )
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "This is a demonstration of text-to-speech synthesis.".to_string());

    let client = ElevenLabsClient::from_env()?;
    let cancel = CancellationToken::new();

    // Ctrl-C aborts whichever request is in flight
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let options = SynthesisOptions::new().with_stability(0.6).with_style(0.1);

    let audio = client
        .text_to_speech(&cancel, &text, RACHEL, ModelId::MultilingualV2.as_str(), options)
        .await?;
    elevenlabs_tts::utils::save("tts.mp3", &audio).await?;
    info!(bytes = audio.len(), "saved tts.mp3");

    let mut file = tokio::fs::File::create("tts_stream.mp3").await?;
    client
        .text_to_speech_stream(&cancel, &mut file, &text, RACHEL, options)
        .await?;
    info!("saved tts_stream.mp3");

    Ok(())
}
