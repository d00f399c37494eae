use crate::endpoints::{TextToSpeech, TextToSpeechBody, TextToSpeechStream, TtsEndpoint};
use crate::error::{Error, Result};
use crate::response;
use bytes::Bytes;
use elevenlabs_tts_domain::SynthesisOptions;
use http::header::{ACCEPT, USER_AGENT};
use reqwest::Url;
use std::fmt;
use std::time::Duration;
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const XI_API_KEY_HEADER: &str = "xi-api-key";
const AUDIO_MPEG: &str = "audio/mpeg";

/// Base URL of the hosted service.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Client identifier sent as `User-Agent`.
pub const DEFAULT_USER_AGENT: &str = concat!("elevenlabs-tts-rs/", env!("CARGO_PKG_VERSION"));

const API_KEY_VARS: [&str; 3] = ["ELEVENLABS_API_KEY", "ELEVEN_API_KEY", "ELEVEN_LABS_API_KEY"];
const BASE_URL_VAR: &str = "ELEVENLABS_BASE_URL";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service root; endpoint paths are appended to it
    pub base_url: String,
    /// Deadline for a whole call, body included. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Client for the text-to-speech endpoints.
///
/// Owns one `reqwest::Client` for its lifetime; clones share it. Every
/// operation takes a [`CancellationToken`]; cancelling it aborts the
/// in-flight request and drops the response.
#[derive(Clone)]
pub struct ElevenLabsClient {
    inner: reqwest::Client,
    api_key: String,
    base_url: Url,
    user_agent: String,
}

impl ElevenLabsClient {
    pub fn from_env() -> Result<Self> {
        let mut config = ClientConfig::default();
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        Self::from_env_with_config(config)
    }

    pub fn from_env_with_config(config: ClientConfig) -> Result<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|key| !key.is_empty()))
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "no ElevenLabs API key found, set one of {}",
                    API_KEY_VARS.join(", ")
                ))
            })?;

        Self::new_with_config(api_key, config)
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::new_with_config(api_key, ClientConfig::default())
    }

    pub fn new_with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        // Ignore the error: another component may have installed a provider already
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut root_store = rustls::RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let mut tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();
        tls_config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];

        let mut builder = reqwest::Client::builder()
            .use_preconfigured_tls(tls_config)
            .connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder
            .build()
            .map_err(|e| Error::Configuration(format!("failed to create http client: {e}")))?;

        Ok(Self {
            inner,
            api_key: api_key.into(),
            base_url,
            user_agent: config.user_agent,
        })
    }

    /// Build on an existing `reqwest::Client`. Its own timeouts and TLS
    /// settings apply; only `base_url` and `user_agent` are read from `config`.
    pub fn with_http_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            inner: client,
            api_key: api_key.into(),
            base_url: parse_base_url(&config.base_url)?,
            user_agent: config.user_agent,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Synthesize `text` and return the whole audio body.
    pub async fn text_to_speech(
        &self,
        cancel: &CancellationToken,
        text: &str,
        voice_id: &str,
        model_id: &str,
        options: SynthesisOptions,
    ) -> Result<Bytes> {
        let body = TextToSpeechBody::new(text)
            .with_model_id(model_id)
            .with_voice_settings(options.clamped());
        self.hit(cancel, TextToSpeech::new(voice_id, body)).await
    }

    /// Synthesize `text`, writing the audio into `writer` as it arrives.
    pub async fn text_to_speech_to_writer<W>(
        &self,
        cancel: &CancellationToken,
        writer: &mut W,
        text: &str,
        model_id: &str,
        voice_id: &str,
        options: SynthesisOptions,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let body = TextToSpeechBody::new(text)
            .with_model_id(model_id)
            .with_voice_settings(options.clamped());
        self.hit_to_writer(cancel, TextToSpeech::new(voice_id, body), writer)
            .await
            .map(|_| ())
    }

    /// Synthesize `text` on the streaming endpoint, writing audio into `writer`.
    ///
    /// No model id is sent; use [`TextToSpeechStream::with_model_id`] with
    /// [`hit_to_writer`](Self::hit_to_writer) to pick one.
    pub async fn text_to_speech_stream<W>(
        &self,
        cancel: &CancellationToken,
        writer: &mut W,
        text: &str,
        voice_id: &str,
        options: SynthesisOptions,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let body = TextToSpeechBody::new(text).with_voice_settings(options.clamped());
        self.hit_to_writer(cancel, TextToSpeechStream::new(voice_id, body), writer)
            .await
            .map(|_| ())
    }

    /// Call `endpoint` and collect the audio into memory.
    pub async fn hit<T: TtsEndpoint>(&self, cancel: &CancellationToken, endpoint: T) -> Result<Bytes> {
        let mut audio = Vec::new();
        self.hit_to_writer(cancel, endpoint, &mut audio).await?;
        Ok(Bytes::from(audio))
    }

    /// Call `endpoint` and copy the audio into `writer`, returning the byte count.
    pub async fn hit_to_writer<T, W>(
        &self,
        cancel: &CancellationToken,
        endpoint: T,
        writer: &mut W,
    ) -> Result<u64>
    where
        T: TtsEndpoint,
        W: AsyncWrite + Unpin + ?Sized,
    {
        let url = endpoint.url(&self.base_url)?;
        let call = async {
            let resp = self.send(url, endpoint.request_body()).await?;
            let resp = response::check_status(resp).await?;
            response::copy_audio(resp, writer).await
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("text-to-speech request cancelled");
                Err(Error::Cancelled)
            }
            result = call => result,
        }
    }

    async fn send(&self, url: Url, body: &TextToSpeechBody) -> Result<reqwest::Response> {
        debug!(
            %url,
            text_length = body.text().len(),
            model_id = body.model_id().unwrap_or_default(),
            "sending text-to-speech request"
        );

        let resp = self
            .inner
            .post(url)
            .header(XI_API_KEY_HEADER, &self.api_key)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, AUDIO_MPEG)
            .json(body)
            .send()
            .await?;

        debug!(status = %resp.status(), "text-to-speech response received");
        Ok(resp)
    }
}

impl fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Configuration(format!(
            "base url '{raw}' must be an http(s) url"
        )));
    }
    Ok(url)
}
