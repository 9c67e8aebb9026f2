use crate::models::ErrorResponse;

/// Boxed error produced by a [`Transport`](crate::transport::Transport).
///
/// The underlying error can be recovered with `downcast_ref` (e.g. to
/// `reqwest::Error`).
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("constructing request: {0}")]
    Build(#[from] BuildError),
    #[error("Request error: {0}")]
    Request(#[source] TransportError),
    #[error("ConvertKit not found: {0}")]
    NotFound(ErrorResponse),
    #[error("ConvertKit error: {0}")]
    Api(ErrorResponse),
    #[error("decoding response with status {status}: {source}")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// The HTTP status code attached to this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound(e) | Error::Api(e) => Some(e.status_code),
            Error::Decode { status, .. } => Some(*status),
            Error::Build(_) | Error::Request(_) => None,
        }
    }

    /// The raw response body, if one was read before failing.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Error::Api(e) => Some(&e.raw_body),
            Error::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Failures that happen before anything is sent over the wire.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("serializing params: {0}")]
    Params(#[source] serde_json::Error),
    #[error("params must serialize to a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("invalid url {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("building http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
