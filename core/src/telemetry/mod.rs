//! telemetry/mod.rs
//! Per-call frame and byte counters, plus an immutable snapshot view.
//!
//! Notes:
//! - Counters are local to one compress/decompress call; nothing is global.
//! - Snapshots are serde-serializable so callers can ship them as JSON.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
