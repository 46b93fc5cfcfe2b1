//! Error types for the football-data source client.

use thiserror::Error;

/// Errors produced while fetching or normalizing provider data.
///
/// `RateLimited` and `Timeout` are transient: the scheduler retries the
/// cycle on its next trigger. `MalformedRecord` is only surfaced for
/// response envelopes that cannot be read at all; individual bad rows
/// inside an otherwise valid envelope are skipped during normalization.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited by provider")]
    RateLimited,

    /// The request exceeded the bounded timeout.
    #[error("Request timed out")]
    Timeout,

    /// Any other provider-side failure (network, 5xx, bad envelope).
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// A response body that could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    MalformedRecord(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout
        } else {
            SourceError::ProviderError(err.to_string())
        }
    }
}
