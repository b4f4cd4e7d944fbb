//! Photo fetching.
//!
//! Photo URLs in the export point at remote images; the serializer pulls
//! them through this seam so tests and offline runs can substitute their
//! own implementation. Fetch failures are never fatal to a record.

use std::time::Duration;

use thiserror::Error;

/// Per-request timeout. One unresponsive host stalls its record but must
/// not hang the run indefinitely.
pub const PHOTO_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// User agent string for photo requests.
const USER_AGENT_VALUE: &str = concat!("vcard-batcher/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Fetches raw image bytes for a photo URL.
pub trait PhotoFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP implementation used by the CLI.
pub struct HttpPhotoFetcher {
    client: reqwest::blocking::Client,
}

impl HttpPhotoFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(PHOTO_FETCH_TIMEOUT)
            .user_agent(USER_AGENT_VALUE)
            .build()?;
        Ok(Self { client })
    }
}

impl PhotoFetcher for HttpPhotoFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.bytes()?.to_vec())
    }
}
