use crate::error::{Error, Result};
pub use crate::shared::{AndPathParam, PathParam};
use reqwest::Url;

pub mod tts;

pub use tts::{TextToSpeech, TextToSpeechBody, TextToSpeechStream};

/// A synthesis endpoint: a POST path with placeholders and a JSON body.
pub trait TtsEndpoint {
    const PATH: &'static str;

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![]
    }

    fn request_body(&self) -> &TextToSpeechBody;

    /// Resolve [`Self::PATH`] against `base`, substituting placeholders.
    ///
    /// Parameters are pushed as whole path segments, so a voice id can never
    /// escape its segment.
    fn url(&self, base: &Url) -> Result<Url> {
        let params = self.path_params();
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::Configuration(format!("base url '{base}' cannot carry a path")))?;
            segments.pop_if_empty();
            for segment in Self::PATH.split('/').filter(|s| !s.is_empty()) {
                match params.iter().find(|(placeholder, _)| *placeholder == segment) {
                    Some((_, value)) => segments.push(value),
                    None => segments.push(segment),
                };
            }
        }
        Ok(url)
    }
}
