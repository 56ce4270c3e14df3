//! dictionary/mod.rs
//! Ordered substitution dictionaries.
//!
//! Notes:
//! - Position is the code: entry `i` is emitted as byte `i`.
//! - Dictionaries are supplied out-of-band and are never embedded in the stream;
//!   encoder and decoder must hold identical entries in identical order.
//! - `fingerprint()` lets callers check that out-of-band agreement cheaply.

pub mod standard;
pub mod types;

pub use standard::STANDARD;
pub use types::*;
