//! Fetch collaborator contract.
//!
//! The transport that actually performs authenticated HTTP requests against the
//! bucket backend lives outside this crate; the synchronizer only depends on this
//! trait. Timeouts and TLS are the implementation's concern and surface here as
//! [`NetworkingError`] like any other failure.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures raised by the fetch collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkingError {
    #[error("network transport failure: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {status}")]
    HttpFailure { status: u16 },
    #[error("could not encode request body")]
    CouldNotEncodeBody,
    #[error("could not parse response payload")]
    CouldNotParseData,
    #[error("response is missing its published-until marker")]
    MissingPublishedUntil,
}

/// Result of fetching one day-bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseBatch {
    /// Raw key material for the matcher. `None` means nothing new was published
    /// for the bucket since `published_after`; that is a success, not an error.
    pub payload: Option<Vec<u8>>,
    /// Server-reported instant up to which this bucket's publications are now
    /// covered. Becomes the bucket's watermark once the cycle commits.
    pub published_until: DateTime<Utc>,
}

/// Client for the exposure-case backend.
#[async_trait]
pub trait ExposeeService: Send + Sync {
    /// Fetch the batch for the bucket opening at `batch_start` (a UTC midnight),
    /// restricted to data published strictly after `published_after` when given.
    async fn fetch_batch(
        &self,
        batch_start: DateTime<Utc>,
        published_after: Option<DateTime<Utc>>,
    ) -> Result<CaseBatch, NetworkingError>;
}
