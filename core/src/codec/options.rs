//! codec/options.rs
//! Codec configuration.
//!
//! Options are plain data: they can be built in code, parsed from JSON, and
//! layered with `merge`. Nothing is read from process-global state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dictionary::{ConfigError, Dictionary};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    /// Substitution entries, code = position. `None` selects the standard
    /// reference dictionary.
    pub dictionary: Option<Vec<String>>,
}

impl CodecOptions {
    pub fn with_dictionary<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dictionary: Some(entries.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse options from a JSON document such as `{"dictionary": ["the", "a"]}`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON options file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Field-wise merge: anything set in `overrides` replaces the value in `self`.
    pub fn merge(self, overrides: CodecOptions) -> CodecOptions {
        CodecOptions {
            dictionary: overrides.dictionary.or(self.dictionary),
        }
    }

    /// Resolve the configured dictionary, validating its size.
    pub fn resolve_dictionary(&self) -> Result<Dictionary, ConfigError> {
        match &self.dictionary {
            Some(entries) => Dictionary::new(entries.clone()),
            None => Ok(Dictionary::standard()),
        }
    }
}
