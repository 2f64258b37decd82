use thiserror::Error;

#[derive(Debug, Error)]
pub enum LcdClientError {
    // Transport and response errors
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message} (HTTP {status})")]
    Server { message: String, status: u16 },
    #[error("Received null response from server")]
    EmptyResponse,
    #[error("Unexpected response data format from {endpoint}")]
    MalformedResponse { endpoint: String },
    #[error("error decoding {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },

    // Caller input errors
    #[error("{0}")]
    InvalidArgument(String),
    #[error("invalid connection options: {0}")]
    InvalidConfig(String),
    #[error("{0}")]
    Assertion(String),

    // Extension composition errors
    #[error("Extension must be a non-null object. Found type {found}.")]
    InvalidExtension { found: &'static str },
    #[error("Module must be a non-null object. Found type {found} for module \"{namespace}\".")]
    InvalidExtensionModule {
        namespace: String,
        found: &'static str,
    },
    #[error("invalid route \"{method}\" in module \"{namespace}\": {reason}")]
    InvalidRoute {
        namespace: String,
        method: String,
        reason: String,
    },
    #[error("no module \"{0}\" is attached to this client")]
    UnknownNamespace(String),
    #[error("module \"{namespace}\" has no method \"{method}\"")]
    UnknownMethod { namespace: String, method: String },
}

impl From<url::ParseError> for LcdClientError {
    fn from(error: url::ParseError) -> LcdClientError {
        LcdClientError::InvalidConfig(error.to_string())
    }
}
