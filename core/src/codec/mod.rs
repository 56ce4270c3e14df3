//! codec/mod.rs
//! Public compress/decompress surface.
//!
//! Notes:
//! - The index is built once per dictionary in `Codec` construction.
//! - Encoder and decoder keep all scratch state local to a call.

pub mod decoder;
pub mod encoder;
pub mod options;
pub mod types;

pub use options::CodecOptions;
pub use types::Codec;
