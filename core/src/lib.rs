//! lexpack-core
//!
//! Dictionary-substitution text codec. Frequent substrings become single-byte
//! codes from a caller-supplied dictionary of at most 254 entries; everything
//! else is copied as UTF-8 literal frames.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;

pub mod dictionary;
pub mod index;
pub mod framing;
pub mod telemetry;

// Public surface
pub mod codec;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{Codec, CodecOptions};
    pub use crate::dictionary::{ConfigError, Dictionary, STANDARD};
    pub use crate::framing::MalformedInputError;
    pub use crate::telemetry::{CodecSnapshot, FrameCounters};
}

pub use codec::{Codec, CodecOptions};
pub use dictionary::{ConfigError, Dictionary};
pub use framing::MalformedInputError;
