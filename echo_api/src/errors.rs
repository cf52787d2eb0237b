//! Error types for the API client.

/// Errors that can occur when building or running an ECHO request.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A human-readable parameter name is not in the endpoint's dictionary.
    #[error("Invalid query parameter provided: {key}")]
    InvalidParameter { key: String },
    /// The HTTP request failed (connection error or timeout).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The API answered with something other than HTTP 200.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The body was not valid JSON, or a scalar failed its coercion rule.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    /// The response was well formed but carried an error message.
    #[error("The ECHO API request returned an error: {message}")]
    Api { message: String },
}

impl Error {
    /// True for network failures and non-200 responses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_) | Error::HttpStatus { .. })
    }

    /// True when the response body could not be decoded.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}
