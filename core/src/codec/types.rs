//! codec/types.rs
//! The public codec: a dictionary plus its prebuilt index.

use std::fmt;

use crate::codec::options::CodecOptions;
use crate::codec::{decoder, encoder};
use crate::dictionary::{ConfigError, Dictionary};
use crate::framing::MalformedInputError;
use crate::index::Trie;
use crate::telemetry::FrameCounters;

/// Immutable after construction; `Send + Sync`, so one instance may serve
/// any number of concurrent callers.
#[derive(Clone)]
pub struct Codec {
    options: CodecOptions,
    dictionary: Dictionary,
    index: Trie,
}

impl Codec {
    /// Build a codec over an already validated dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        let options = CodecOptions {
            dictionary: Some(dictionary.entries().to_vec()),
        };
        Self::assemble(options, dictionary)
    }

    /// Build a codec from raw entries.
    ///
    /// # Errors
    /// - `ConfigError::TooManyEntries` for more than 254 entries.
    pub fn create<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_options(&CodecOptions::with_dictionary(entries))
    }

    /// Codec over the standard reference dictionary.
    pub fn standard() -> Self {
        Self::assemble(CodecOptions::default(), Dictionary::standard())
    }

    pub fn from_options(options: &CodecOptions) -> Result<Self, ConfigError> {
        let dictionary = options.resolve_dictionary()?;
        Ok(Self::assemble(options.clone(), dictionary))
    }

    /// New independent codec using this codec's options overlaid with `overrides`.
    pub fn derive(&self, overrides: CodecOptions) -> Result<Self, ConfigError> {
        Self::from_options(&self.options.clone().merge(overrides))
    }

    fn assemble(options: CodecOptions, dictionary: Dictionary) -> Self {
        let index = Trie::build(&dictionary);
        tracing::debug!(
            entries = dictionary.len(),
            fingerprint = dictionary.fingerprint(),
            "codec ready"
        );
        Self {
            options,
            dictionary,
            index,
        }
    }

    /// Compress `text`. Total: every string has an encoding.
    pub fn compress(&self, text: &str) -> Vec<u8> {
        encoder::encode(&self.index, text).0
    }

    pub fn compress_with_stats(&self, text: &str) -> (Vec<u8>, FrameCounters) {
        encoder::encode(&self.index, text)
    }

    /// Decompress `bytes` produced with an identical dictionary.
    pub fn decompress(&self, bytes: &[u8]) -> Result<String, MalformedInputError> {
        decoder::decode(bytes, &self.dictionary).map(|(text, _)| text)
    }

    pub fn decompress_with_stats(
        &self,
        bytes: &[u8],
    ) -> Result<(String, FrameCounters), MalformedInputError> {
        decoder::decode(bytes, &self.dictionary)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn index(&self) -> &Trie {
        &self.index
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("dictionary", &self.dictionary)
            .field("index_nodes", &self.index.node_count())
            .finish()
    }
}
