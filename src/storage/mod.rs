//! Watermark persistence.
//!
//! The synchronizer never touches durable storage directly; it depends on the
//! [`traits::WatermarkStore`] contract and the host application injects an
//! implementation (platform defaults, a keychain-backed file, ...). The
//! [`memory::InMemoryWatermarkStore`] is the reference implementation used by
//! tests and by hosts that keep sync state process-local.

pub mod memory;
pub mod traits;

pub use memory::InMemoryWatermarkStore;
pub use traits::WatermarkStore;
