//! constants.rs
//! Stable wire constants shared by the encoder and decoder.
//!
//! Byte-stream layout (one lead byte per frame):
//!
//! ```text
//! 0..=253  dictionary code           (no payload)
//! 254      single literal byte       [254, b0]
//! 255      literal run of n bytes    [255, n - 1, b0 .. b(n-1)]   2 <= n <= 256
//! ```

/// Largest dictionary a codec accepts. Codes 254 and 255 are reserved markers.
pub const MAX_DICTIONARY_LEN: usize = 254;

/// Highest byte value that is a dictionary code.
pub const MAX_CODE: u8 = (MAX_DICTIONARY_LEN - 1) as u8;

/// Lead byte of a one-byte literal frame.
pub const LITERAL_MARKER: u8 = 254;

/// Lead byte of a literal run frame.
pub const RUN_MARKER: u8 = 255;

/// Maximum payload bytes carried by one run frame (length byte + 1).
pub const MAX_RUN_LEN: usize = 256;

/// Bytes of framing in front of a run payload (marker + length).
pub const RUN_HEADER_LEN: usize = 2;
