//! dictionary/types.rs
//! Validated dictionary type and configuration errors.

use std::fmt;

use thiserror::Error;

use crate::constants::MAX_DICTIONARY_LEN;
use crate::dictionary::standard::STANDARD;

/// Raised when a codec cannot be constructed from the supplied configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dictionary must have at most {max} entries, but it has {len}")]
    TooManyEntries { len: usize, max: usize },

    #[error("invalid codec options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read codec options: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered, immutable list of substitution strings. Entry `i` has code `i`.
///
/// Duplicate texts are accepted; only position matters for decoding, and the
/// index resolves a duplicated text to its last position.
#[derive(Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<String>,
}

impl Dictionary {
    /// Validate and wrap `entries`.
    ///
    /// # Errors
    /// - `ConfigError::TooManyEntries` if more than [`MAX_DICTIONARY_LEN`] entries are given.
    pub fn new(entries: Vec<String>) -> Result<Self, ConfigError> {
        if entries.len() > MAX_DICTIONARY_LEN {
            return Err(ConfigError::TooManyEntries {
                len: entries.len(),
                max: MAX_DICTIONARY_LEN,
            });
        }
        Ok(Self { entries })
    }

    /// Convenience constructor over any iterator of string-likes.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(entries.into_iter().map(Into::into).collect())
    }

    /// The standard reference dictionary.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// Entry text for `code`, if the dictionary has one.
    #[inline]
    pub fn get(&self, code: u8) -> Option<&str> {
        self.entries.get(code as usize).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// CRC-32 over the length-prefixed entries.
    ///
    /// Two dictionaries with the same fingerprint are, with overwhelming
    /// likelihood, wire-compatible. Order matters.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.entries.len() as u32).to_le_bytes());
        for entry in &self.entries {
            hasher.update(&(entry.len() as u32).to_le_bytes());
            hasher.update(entry.as_bytes());
        }
        hasher.finalize()
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl TryFrom<Vec<String>> for Dictionary {
    type Error = ConfigError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("len", &self.entries.len())
            .field("fingerprint", &format_args!("{:08x}", self.fingerprint()))
            .finish()
    }
}
