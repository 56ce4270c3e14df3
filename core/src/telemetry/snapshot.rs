//! telemetry/snapshot.rs
//! Immutable view over [`FrameCounters`] with derived ratios.

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::FrameCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecSnapshot {
    pub frames_code: u64,
    pub frames_literal: u64,
    pub frames_run: u64,
    pub bytes_text: u64,
    pub bytes_literal: u64,
    pub bytes_encoded: u64,
    /// `bytes_encoded / bytes_text`; `0.0` for empty text. May exceed 1.0 for
    /// text the dictionary does not cover.
    pub compression_ratio: f64,
    /// Share of text bytes that travelled as literals.
    pub literal_share: f64,
}

impl CodecSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&FrameCounters> for CodecSnapshot {
    fn from(counters: &FrameCounters) -> Self {
        let ratio = |num: u64| {
            if counters.bytes_text > 0 {
                num as f64 / counters.bytes_text as f64
            } else {
                0.0
            }
        };

        Self {
            frames_code: counters.frames_code,
            frames_literal: counters.frames_literal,
            frames_run: counters.frames_run,
            bytes_text: counters.bytes_text,
            bytes_literal: counters.bytes_literal,
            bytes_encoded: counters.bytes_encoded,
            compression_ratio: ratio(counters.bytes_encoded),
            literal_share: ratio(counters.bytes_literal),
        }
    }
}
