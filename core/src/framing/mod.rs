//! Wire framing for encoded text.
//!
//! Responsibilities:
//! - Classify lead bytes (dictionary code vs. literal markers)
//! - Write frames following the 256-byte flush rule
//! - Read frames with strict bounds checks, coalescing split literal spans
//!
//! Non-responsibilities:
//! - Dictionary matching
//! - UTF-8 validation of decoded spans

pub mod decode;
pub mod encode;
pub mod types;

pub use decode::{decode_frames, FrameReader};
pub use encode::{FrameWriter, VerbatimRun};
pub use types::{Frame, LeadByte, MalformedInputError, Marker};
