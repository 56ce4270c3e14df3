//! telemetry/counters.rs
//! Mutable counters filled in while frames are written or read.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Deterministic counters collected during one encode or decode.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCounters {
    /// Dictionary-code frames.
    pub frames_code: u64,
    /// Single-byte literal frames (`254`).
    pub frames_literal: u64,
    /// Literal run frames (`255`).
    pub frames_run: u64,
    /// UTF-8 length of the text side.
    pub bytes_text: u64,
    /// Literal payload bytes carried by literal and run frames.
    pub bytes_literal: u64,
    /// Length of the encoded side.
    pub bytes_encoded: u64,
}

impl FrameCounters {
    /// Record one dictionary-code frame.
    #[inline]
    pub fn add_code(&mut self) {
        self.frames_code += 1;
    }

    /// Record one single-byte literal frame.
    #[inline]
    pub fn add_literal(&mut self) {
        self.frames_literal += 1;
        self.bytes_literal += 1;
    }

    /// Record one run frame carrying `payload_len` bytes.
    #[inline]
    pub fn add_run(&mut self, payload_len: usize) {
        self.frames_run += 1;
        self.bytes_literal += payload_len as u64;
    }

    pub fn frames_total(&self) -> u64 {
        self.frames_code + self.frames_literal + self.frames_run
    }

    /// Record both ends of a finished call.
    pub fn set_totals(&mut self, text_len: usize, encoded_len: usize) {
        self.bytes_text = text_len as u64;
        self.bytes_encoded = encoded_len as u64;
    }
}

impl AddAssign<&FrameCounters> for FrameCounters {
    fn add_assign(&mut self, rhs: &FrameCounters) {
        self.frames_code += rhs.frames_code;
        self.frames_literal += rhs.frames_literal;
        self.frames_run += rhs.frames_run;
        self.bytes_text += rhs.bytes_text;
        self.bytes_literal += rhs.bytes_literal;
        self.bytes_encoded += rhs.bytes_encoded;
    }
}
