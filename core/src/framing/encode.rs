//! framing/encode.rs
//! Frame writer and the verbatim-run buffer used by the encoder.
//!
//! Flush rule for a literal run of `n` bytes (`1 <= n <= 256`):
//!
//! ```text
//! n == 1  ->  [254, b0]
//! n >= 2  ->  [255, n - 1, b0 .. b(n-1)]
//! ```
//!
//! A run is cut at exactly 256 bytes even when that splits a multi-byte
//! character; the decoder coalesces the pieces back into one span.

use crate::constants::{LITERAL_MARKER, MAX_CODE, MAX_RUN_LEN, RUN_MARKER};
use crate::telemetry::FrameCounters;

/// Appends frames to an output buffer and counts them.
#[derive(Debug, Default)]
pub struct FrameWriter {
    out: Vec<u8>,
    counters: FrameCounters,
}

impl FrameWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            counters: FrameCounters::default(),
        }
    }

    /// Emit a dictionary-code frame.
    #[inline]
    pub fn push_code(&mut self, code: u8) {
        debug_assert!(code <= MAX_CODE, "code {code} collides with a marker");
        self.out.push(code);
        self.counters.add_code();
    }

    /// Emit one literal frame for `bytes` (`1..=256` bytes).
    pub fn push_literal(&mut self, bytes: &[u8]) {
        debug_assert!(!bytes.is_empty() && bytes.len() <= MAX_RUN_LEN);
        match bytes {
            [] => {}
            [single] => {
                self.out.push(LITERAL_MARKER);
                self.out.push(*single);
                self.counters.add_literal();
            }
            _ => {
                self.out.push(RUN_MARKER);
                self.out.push((bytes.len() - 1) as u8);
                self.out.extend_from_slice(bytes);
                self.counters.add_run(bytes.len());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Hand back the encoded bytes and the frame counters (`bytes_encoded` set).
    pub fn finish(self, text_len: usize) -> (Vec<u8>, FrameCounters) {
        let Self { out, mut counters } = self;
        counters.set_totals(text_len, out.len());
        (out, counters)
    }
}

/// Raw UTF-8 of unmatched characters waiting to be framed.
#[derive(Debug, Default)]
pub struct VerbatimRun {
    buf: Vec<u8>,
}

impl VerbatimRun {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(MAX_RUN_LEN + 4),
        }
    }

    /// Append one unmatched character. Whenever the run holds 256 bytes or
    /// more, exactly 256 are framed until fewer remain.
    pub fn push_char(&mut self, ch: char, writer: &mut FrameWriter) {
        let mut utf8 = [0u8; 4];
        self.buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());

        if self.buf.len() >= MAX_RUN_LEN {
            let full = self.buf.len() / MAX_RUN_LEN * MAX_RUN_LEN;
            for chunk in self.buf[..full].chunks_exact(MAX_RUN_LEN) {
                writer.push_literal(chunk);
            }
            self.buf.drain(..full);
        }
    }

    /// Frame everything pending (no-op when empty).
    pub fn flush(&mut self, writer: &mut FrameWriter) {
        for chunk in self.buf.chunks(MAX_RUN_LEN) {
            writer.push_literal(chunk);
        }
        self.buf.clear();
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
