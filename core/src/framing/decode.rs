//! framing/decode.rs
//! Bounds-checked frame reader.
//!
//! Every read checks the lookahead it needs before touching the buffer and
//! reports the index it wanted on failure. Nothing here panics on hostile input.

use crate::constants::{LITERAL_MARKER, RUN_MARKER};
use crate::framing::types::{Frame, LeadByte, Marker, MalformedInputError};
use crate::telemetry::FrameCounters;

/// Cursor over an encoded buffer.
#[derive(Debug)]
pub struct FrameReader<'a> {
    buf: &'a [u8],
    pos: usize,
    counters: FrameCounters,
}

impl<'a> FrameReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            counters: FrameCounters::default(),
        }
    }

    /// Index of the next unread byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Classify the next lead byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<LeadByte> {
        self.buf.get(self.pos).copied().map(LeadByte::classify)
    }

    /// Read the next physical frame, or `None` at end of input.
    pub fn read_frame(&mut self) -> Result<Option<Frame<'a>>, MalformedInputError> {
        let frame = match self.peek() {
            None => return Ok(None),
            Some(LeadByte::Code(code)) => {
                self.pos += 1;
                self.counters.add_code();
                Frame::Code(code)
            }
            Some(LeadByte::Marker(Marker::Literal)) => Frame::Literal(self.read_literal()?),
            Some(LeadByte::Marker(Marker::Run)) => Frame::Run(self.read_run()?),
        };
        Ok(Some(frame))
    }

    /// Read one logical literal span into `pending`.
    ///
    /// The encoder cuts runs at 256 bytes regardless of character boundaries,
    /// so a span may be a run frame followed by more run frames and at most
    /// one trailing single-literal frame. All of them land in `pending`.
    /// A span that starts with a single-literal frame is that byte alone.
    ///
    /// Must be called with the cursor on a marker byte.
    pub fn read_literal_span(&mut self, pending: &mut Vec<u8>) -> Result<(), MalformedInputError> {
        match self.peek() {
            Some(LeadByte::Marker(Marker::Literal)) => {
                pending.push(self.read_literal()?);
                return Ok(());
            }
            Some(LeadByte::Marker(Marker::Run)) => {}
            _ => return Ok(()),
        }

        loop {
            pending.extend_from_slice(self.read_run()?);
            match self.buf.get(self.pos) {
                Some(&RUN_MARKER) => continue,
                Some(&LITERAL_MARKER) => {
                    pending.push(self.read_literal()?);
                    break;
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Consume the reader, returning its counters with `text_len` recorded.
    pub fn finish(self, text_len: usize) -> FrameCounters {
        let mut counters = self.counters;
        counters.set_totals(text_len, self.buf.len());
        counters
    }

    /// `[254, b0]` at the cursor.
    fn read_literal(&mut self) -> Result<u8, MalformedInputError> {
        let index = self.pos + 1;
        let byte = *self.buf.get(index).ok_or(MalformedInputError::Truncated {
            len: self.buf.len(),
            index,
        })?;
        self.pos = index + 1;
        self.counters.add_literal();
        Ok(byte)
    }

    /// `[255, n - 1, payload..]` at the cursor.
    fn read_run(&mut self) -> Result<&'a [u8], MalformedInputError> {
        let len = self.buf.len();
        let length_at = self.pos + 1;
        let n = *self.buf.get(length_at).ok_or(MalformedInputError::Truncated {
            len,
            index: length_at,
        })? as usize
            + 1;

        let start = length_at + 1;
        let end = start + n;
        if end > len {
            return Err(MalformedInputError::RunOutOfBounds {
                len,
                start: length_at,
                end,
            });
        }

        self.pos = end;
        self.counters.add_run(n);
        Ok(&self.buf[start..end])
    }
}

/// Split a buffer into its physical frames. Stops at the first structural error.
pub fn decode_frames(buf: &[u8]) -> Result<Vec<Frame<'_>>, MalformedInputError> {
    let mut reader = FrameReader::new(buf);
    let mut frames = Vec::new();
    while let Some(frame) = reader.read_frame()? {
        frames.push(frame);
    }
    Ok(frames)
}
