use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unauthorized: the service rejected the api key")]
    Unauthorized,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode {status} response body: {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
    #[error("transfer interrupted after {bytes_written} bytes: {source}")]
    TransferInterrupted {
        bytes_written: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("request cancelled")]
    Cancelled,
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{}", render_joined(.0))]
    Joined(Vec<Error>),
}

impl Error {
    /// Combine several errors into one, flattening nested joins.
    /// A single cause is returned as is.
    pub fn join(causes: impl IntoIterator<Item = Error>) -> Error {
        let mut causes: Vec<Error> = causes
            .into_iter()
            .flat_map(|e| match e {
                Error::Joined(inner) => inner,
                other => vec![other],
            })
            .collect();
        match causes.len() {
            1 => causes.remove(0),
            _ => Error::Joined(causes),
        }
    }

    pub(crate) fn interrupted(
        bytes_written: u64,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Error {
        Error::TransferInterrupted {
            bytes_written,
            source: source.into(),
        }
    }

    /// The individual causes behind this error. A single error is its own cause.
    pub fn causes(&self) -> &[Error] {
        match self {
            Error::Joined(causes) => causes,
            other => std::slice::from_ref(other),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.causes().iter().any(|e| matches!(e, Error::Unauthorized))
    }

    pub fn is_cancelled(&self) -> bool {
        self.causes().iter().any(|e| matches!(e, Error::Cancelled))
    }

    pub fn is_decode_failure(&self) -> bool {
        self.causes().iter().any(|e| matches!(e, Error::Decode { .. }))
    }

    /// The service's validation payload, if one was decoded.
    pub fn validation(&self) -> Option<&ValidationError> {
        self.causes().iter().find_map(|e| match e {
            Error::Validation(v) => Some(v),
            _ => None,
        })
    }
}

fn render_joined(causes: &[Error]) -> String {
    causes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rejection payload returned by the service for any status other than 200 and 401.
///
/// The service answers with one of
/// `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}`,
/// `{"detail": {"status": "...", "message": "..."}}` or `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationError {
    /// HTTP status the payload arrived with.
    #[serde(skip)]
    pub status: StatusCode,
    #[serde(default)]
    pub detail: ValidationDetail,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValidationDetail {
    Fields(Vec<FieldError>),
    Status { status: String, message: String },
    Message(String),
}

impl Default for ValidationDetail {
    fn default() -> Self {
        ValidationDetail::Fields(Vec::new())
    }
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl ValidationError {
    /// Decode a rejection body. Only a JSON object is accepted; derived
    /// struct decoding would otherwise take an array as a positional sequence.
    pub(crate) fn from_slice(status: StatusCode, body: &[u8]) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected a JSON object, found {value}"
            )));
        }
        let mut error: ValidationError = serde_json::from_value(value)?;
        error.status = status;
        Ok(error)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error ({}): ", self.status.as_u16())?;
        match &self.detail {
            ValidationDetail::Fields(fields) if fields.is_empty() => f.write_str("no details"),
            ValidationDetail::Fields(fields) => {
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{field}")?;
                }
                Ok(())
            }
            ValidationDetail::Status { status, message } => write!(f, "{status}: {message}"),
            ValidationDetail::Message(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self
            .loc
            .iter()
            .map(|part| match part {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        if !loc.is_empty() {
            write!(f, "{loc}: ")?;
        }
        f.write_str(&self.msg)?;
        if !self.kind.is_empty() {
            write!(f, " [{}]", self.kind)?;
        }
        Ok(())
    }
}
