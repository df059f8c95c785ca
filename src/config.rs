//! Configuration for the synchronizer.
//!
//! # Example
//!
//! ```
//! use exposure_sync::{ApplicationDescriptor, SyncConfig};
//!
//! let descriptor = ApplicationDescriptor {
//!     app_id: "ch.example.tracing".into(),
//!     bucket_base_url: "https://cases.example.org".into(),
//!     report_base_url: "https://report.example.org".into(),
//! };
//!
//! // Minimal config (uses defaults)
//! let config = SyncConfig::default();
//! assert_eq!(config.days_to_check, 10);
//!
//! let config = SyncConfig { days_to_check: 14 };
//! # let _ = (descriptor, config);
//! ```

use serde::Deserialize;

/// Identifies which backend and app namespace is being synced.
///
/// Immutable once constructed; owned exclusively by the synchronizer instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicationDescriptor {
    /// Application identifier, e.g. `"ch.example.tracing"`.
    pub app_id: String,
    /// Base URL of the case-bucket backend.
    pub bucket_base_url: String,
    /// Base URL of the report backend.
    pub report_base_url: String,
}

/// Tunable synchronization parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SyncConfig {
    /// Retention window: maximum number of day-buckets ever requested in one
    /// cycle, bounding catch-up cost after first run or a long gap (default: 10).
    #[serde(default = "default_days_to_check")]
    pub days_to_check: u32,
}

fn default_days_to_check() -> u32 {
    10
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            days_to_check: default_days_to_check(),
        }
    }
}
