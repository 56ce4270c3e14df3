//! codec/encoder.rs
//! Drives the matcher across the text and frames the result.

use crate::framing::{FrameWriter, VerbatimRun};
use crate::index::{Matcher, Trie};
use crate::telemetry::FrameCounters;

/// Encode `text` against `trie`.
///
/// Matching works on whole characters, never on UTF-8 bytes, so a multi-byte
/// character is either inside a dictionary match or copied verbatim in full.
/// Pending literals are flushed before every dictionary code, and at the end.
pub fn encode(trie: &Trie, text: &str) -> (Vec<u8>, FrameCounters) {
    let chars: Vec<char> = text.chars().collect();
    let mut matcher = Matcher::new(trie);
    let mut writer = FrameWriter::with_capacity(text.len() / 2 + 4);
    let mut run = VerbatimRun::new();

    let mut i = 0;
    while i < chars.len() {
        let found = matcher.find(&chars, i);
        match found.code {
            Some(code) => {
                run.flush(&mut writer);
                writer.push_code(code);
                i = found.next;
            }
            None => {
                run.push_char(chars[i], &mut writer);
                i += 1;
            }
        }
    }
    run.flush(&mut writer);

    let (out, counters) = writer.finish(text.len());
    tracing::trace!(
        text_len = text.len(),
        encoded_len = out.len(),
        frames = counters.frames_total(),
        "encoded text"
    );
    (out, counters)
}
