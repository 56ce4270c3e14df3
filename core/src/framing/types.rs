//! framing/types.rs
//! Frame kinds, lead-byte classification and decode errors.

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::{LITERAL_MARKER, RUN_HEADER_LEN, RUN_MARKER};

/// Reserved lead bytes. Every other byte value is a dictionary code.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum Marker {
    Literal = LITERAL_MARKER,
    Run = RUN_MARKER,
}

/// What a lead byte announces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LeadByte {
    Code(u8),
    Marker(Marker),
}

impl LeadByte {
    #[inline(always)]
    pub fn classify(byte: u8) -> Self {
        match Marker::try_from_primitive(byte) {
            Ok(marker) => LeadByte::Marker(marker),
            Err(_) => LeadByte::Code(byte),
        }
    }
}

/// Borrowed view of one well-formed frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Frame<'a> {
    /// Dictionary code `0..=253`.
    Code(u8),
    /// `[254, b0]`.
    Literal(u8),
    /// `[255, n - 1, payload..]` with `2 <= n <= 256` when produced by the encoder.
    Run(&'a [u8]),
}

impl Frame<'_> {
    /// Encoded size of this frame in bytes.
    pub fn wire_len(&self) -> usize {
        match self {
            Frame::Code(_) => 1,
            Frame::Literal(_) => 2,
            Frame::Run(payload) => RUN_HEADER_LEN + payload.len(),
        }
    }
}

/// Structural violation found while decoding. Every variant carries the
/// buffer length; decoding aborts without returning partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    #[error("malformed input: buffer has {len} bytes, but wants to read at index {index}")]
    Truncated { len: usize, index: usize },

    #[error("malformed input: buffer has {len} bytes, but wants to read from index {start} to {end}")]
    RunOutOfBounds { len: usize, start: usize, end: usize },

    #[error("malformed input: literal bytes starting at index {offset} are not valid UTF-8 (buffer has {len} bytes)")]
    InvalidUtf8 { len: usize, offset: usize },

    #[error("malformed input: code {code} at index {index} has no entry in a dictionary of {dictionary_len} (buffer has {len} bytes)")]
    UnknownCode {
        len: usize,
        index: usize,
        code: u8,
        dictionary_len: usize,
    },
}

impl MalformedInputError {
    /// Length of the buffer that failed to decode.
    pub fn buffer_len(&self) -> usize {
        match self {
            Self::Truncated { len, .. }
            | Self::RunOutOfBounds { len, .. }
            | Self::InvalidUtf8 { len, .. }
            | Self::UnknownCode { len, .. } => *len,
        }
    }

    /// Index the decoder was trying to read when it gave up.
    pub fn index(&self) -> usize {
        match self {
            Self::Truncated { index, .. } | Self::UnknownCode { index, .. } => *index,
            Self::RunOutOfBounds { start, .. } => *start,
            Self::InvalidUtf8 { offset, .. } => *offset,
        }
    }
}
