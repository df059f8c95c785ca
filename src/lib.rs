//! # Exposure Sync
//!
//! Synchronization scheduler for a decentralized proximity-tracing client.
//! Decides which day-buckets of remotely published exposure-case data need a
//! fetch, deduplicates against already-synced state, and commits sync progress
//! all-or-nothing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CaseSynchronizer                        │
//! │  • sync(now) — the sole public entry point                  │
//! │  • serializes overlapping cycles                            │
//! │  • whole-cycle atomic commit of sync progress               │
//! └─────────────────────────────────────────────────────────────┘
//!        │ plan                │ fetch          │ ingest/finalize
//!        ▼                     ▼                ▼
//! ┌──────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │ planner      │   │ ExposeeService  │   │ Matcher         │
//! │ day/check-   │   │ (HTTP backend,  │   │ (crypto/BLE     │
//! │ point math   │   │  injected)      │   │  engine,        │
//! │ (pure)       │   │                 │   │  injected)      │
//! └──────────────┘   └─────────────────┘   └─────────────────┘
//!        │ read watermarks + checkpoint / commit on success
//!        ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │ WatermarkStore (injected; atomic commit is part of the      │
//! │ contract — all entries visible or none)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use exposure_sync::{
//!     ApplicationDescriptor, CaseSynchronizer, InMemoryWatermarkStore, SyncConfig,
//! };
//! # use exposure_sync::{ExposeeService, Matcher};
//!
//! # async fn example(matcher: Arc<dyn Matcher>, service: Arc<dyn ExposeeService>) {
//! let descriptor = ApplicationDescriptor {
//!     app_id: "ch.example.tracing".into(),
//!     bucket_base_url: "https://cases.example.org".into(),
//!     report_base_url: "https://report.example.org".into(),
//! };
//!
//! let store = Arc::new(InMemoryWatermarkStore::new());
//! let sync = CaseSynchronizer::new(descriptor, SyncConfig::default(), matcher, service, store);
//!
//! // One cycle: plan → fetch → ingest → finalize → commit.
//! match sync.sync().await {
//!     Ok(()) => println!("synced"),
//!     Err(err) => println!("cycle aborted, will retry later: {err}"),
//! }
//! # }
//! ```
//!
//! ## Guarantees
//!
//! - **Dedup**: a satisfied checkpoint window (06:00/20:00 UTC) costs zero
//!   remote calls.
//! - **Capped catch-up**: never more than `days_to_check` buckets per cycle,
//!   even on first run or after a long gap.
//! - **All-or-nothing**: a watermark advances only when every bucket in the
//!   cycle was fetched, ingested, and the matching session finalized.
//! - **Exactly-once completion**: each `sync` call resolves once, with success
//!   or the originating [`NetworkingError`]/[`MatchingError`].
//!
//! ## Modules
//!
//! - [`synchronizer`]: the [`CaseSynchronizer`] orchestrator
//! - [`planner`]: which day-buckets need a fetch this cycle
//! - [`day`] / [`checkpoint`]: pure UTC day and release-checkpoint arithmetic
//! - [`service`] / [`matcher`] / [`storage`]: injected collaborator contracts

pub mod checkpoint;
pub mod config;
pub mod day;
pub mod matcher;
pub mod metrics;
pub mod planner;
pub mod service;
pub mod storage;
pub mod synchronizer;

pub use checkpoint::last_desired_sync_time;
pub use config::{ApplicationDescriptor, SyncConfig};
pub use day::DayDate;
pub use matcher::{Matcher, MatchingError};
pub use planner::PlannedBatch;
pub use service::{CaseBatch, ExposeeService, NetworkingError};
pub use storage::{InMemoryWatermarkStore, WatermarkStore};
pub use synchronizer::{CaseSynchronizer, SyncError};
