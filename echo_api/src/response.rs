//! Decoding of raw response bodies into typed responses.

use serde::de::DeserializeOwned;

use crate::Error;

/// A typed endpoint response that may carry an embedded API error record.
pub trait EchoResponse: DeserializeOwned {
    /// The embedded error message, if the endpoint has an error record.
    fn error_message(&self) -> Option<&str>;
}

/// Decodes `raw` into `T`, then fails with [`Error::Api`] if the response
/// reports a non-empty error message.
pub fn unmarshal<T: EchoResponse>(raw: &[u8]) -> Result<T, Error> {
    let response = serde_json::from_slice::<T>(raw).map_err(|e| {
        tracing::error!("Failed to parse response: {}", e);
        Error::Parse(e)
    })?;

    if let Some(message) = response.error_message().filter(|m| !m.is_empty()) {
        tracing::error!("ECHO API reported an error: {}", message);
        return Err(Error::Api {
            message: message.to_string(),
        });
    }

    Ok(response)
}
