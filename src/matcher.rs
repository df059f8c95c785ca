//! Matching collaborator contract.
//!
//! The cryptographic/Bluetooth matching engine that ingests key material is an
//! external component. The synchronizer feeds it one payload per day-bucket and
//! closes each cycle with a single finalize call; only after finalize succeeds is
//! any sync progress persisted.

use async_trait::async_trait;
use thiserror::Error;

use crate::day::DayDate;

/// Failures raised by the matching collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    #[error("bluetooth is turned off")]
    BluetoothTurnedOff,
    #[error("exposure framework failure: {0}")]
    Framework(String),
}

/// Ingestion interface of the matching engine.
#[async_trait]
pub trait Matcher: Send + Sync {
    /// Hand a bucket's freshly fetched key material to the matching engine.
    /// Called at most once per bucket per cycle.
    async fn ingest_case_data(&self, payload: &[u8], key_date: DayDate)
        -> Result<(), MatchingError>;

    /// Close the matching session for the cycle. Called exactly once per cycle
    /// that exhausted its plan without a fetch error.
    async fn finalize_session(&self) -> Result<(), MatchingError>;
}
