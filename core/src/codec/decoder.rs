//! codec/decoder.rs
//! Reverses the encoder's framing.
//!
//! State machine over the lead byte at the cursor:
//! - code `0..=253`: append the dictionary entry.
//! - `254` / `255`: read one logical literal span (possibly several physical
//!   frames, see `FrameReader::read_literal_span`) and append it as UTF-8.

use crate::dictionary::Dictionary;
use crate::framing::{Frame, FrameReader, LeadByte, MalformedInputError};
use crate::telemetry::FrameCounters;

/// Decode `bytes` with `dictionary`. Fails on the first structural violation;
/// no partial output is returned.
pub fn decode(
    bytes: &[u8],
    dictionary: &Dictionary,
) -> Result<(String, FrameCounters), MalformedInputError> {
    decode_inner(bytes, dictionary).map_err(|err| {
        tracing::debug!(%err, len = bytes.len(), "rejecting malformed input");
        err
    })
}

fn decode_inner(
    bytes: &[u8],
    dictionary: &Dictionary,
) -> Result<(String, FrameCounters), MalformedInputError> {
    let mut reader = FrameReader::new(bytes);
    let mut out = String::with_capacity(bytes.len() * 2);
    let mut pending = Vec::new();

    while let Some(lead) = reader.peek() {
        let at = reader.position();
        match lead {
            LeadByte::Code(code) => {
                let entry = dictionary
                    .get(code)
                    .ok_or(MalformedInputError::UnknownCode {
                        len: bytes.len(),
                        index: at,
                        code,
                        dictionary_len: dictionary.len(),
                    })?;
                // Consumes exactly the code byte.
                if let Some(Frame::Code(_)) = reader.read_frame()? {
                    out.push_str(entry);
                }
            }
            LeadByte::Marker(_) => {
                pending.clear();
                reader.read_literal_span(&mut pending)?;
                let span = std::str::from_utf8(&pending).map_err(|_| {
                    MalformedInputError::InvalidUtf8 {
                        len: bytes.len(),
                        offset: at,
                    }
                })?;
                out.push_str(span);
            }
        }
    }

    let counters = reader.finish(out.len());
    tracing::trace!(
        encoded_len = bytes.len(),
        text_len = out.len(),
        frames = counters.frames_total(),
        "decoded text"
    );
    Ok((out, counters))
}
