//! Slug configuration.
//!
//! [`SlugOptions`] is the immutable per-call record. [`SlugConfig`] is its
//! partial, deserializable counterpart: every field is optional and
//! [`SlugConfig::apply`] overrides a base record field by field.
use std::collections::HashMap;
use std::num::NonZeroUsize;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::charmap::Charmap;

/// Multi-character substitutions, matched before the transliteration table.
pub type MulticharMap = HashMap<String, String>;

pub const DEFAULT_REPLACEMENT: &str = "-";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid slug config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid `remove` pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("charmap key `{0}` must be exactly one character")]
    CharmapKey(String),

    #[error("`limit` must be a positive number of words")]
    ZeroLimit,
}

#[derive(Debug, Clone)]
pub struct SlugOptions {
    /// Delimiter substituted for every run of whitespace and hyphens.
    pub replacement: String,

    /// Lower-case the final slug.
    pub lower: bool,

    /// Extra pattern deleted from every resolved chunk after the allowed-class filter.
    pub remove: Option<Regex>,

    /// Replace "Symbol, other" characters by their Unicode names.
    pub symbols: bool,

    pub charmap: Charmap,

    pub multicharmap: MulticharMap,

    /// Keep at most this many space-separated words.
    pub limit: Option<NonZeroUsize>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            replacement: DEFAULT_REPLACEMENT.to_string(),
            lower: true,
            remove: None,
            symbols: true,
            charmap: Charmap::Bundled,
            multicharmap: MulticharMap::new(),
            limit: None,
        }
    }
}

impl SlugOptions {
    /// Parse a JSON [`SlugConfig`] and apply it over the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SlugConfig = serde_json::from_str(json)?;
        config.apply(Self::default())
    }
}

/// How a configured `charmap` combines with the bundled table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharmapMode {
    /// Entries replace the whole table.
    #[default]
    Replace,
    /// Entries take precedence over the bundled table.
    Extend,
}

/// Partial options, as read from a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlugConfig {
    pub replacement: Option<String>,
    pub lower: Option<bool>,
    pub remove: Option<String>,
    pub symbols: Option<bool>,
    pub charmap: Option<HashMap<String, String>>,
    pub charmap_mode: CharmapMode,
    pub multicharmap: Option<MulticharMap>,
    pub limit: Option<usize>,
}

impl SlugConfig {
    /// Override `base` with every field this config sets.
    pub fn apply(self, mut base: SlugOptions) -> Result<SlugOptions, ConfigError> {
        if let Some(replacement) = self.replacement {
            base.replacement = replacement;
        }
        if let Some(lower) = self.lower {
            base.lower = lower;
        }
        if let Some(pattern) = self.remove {
            base.remove = Some(Regex::new(&pattern)?);
        }
        if let Some(symbols) = self.symbols {
            base.symbols = symbols;
        }
        if let Some(entries) = self.charmap {
            let mut map = HashMap::with_capacity(entries.len());
            for (key, value) in entries {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        map.insert(c, value);
                    }
                    _ => return Err(ConfigError::CharmapKey(key)),
                }
            }
            base.charmap = match self.charmap_mode {
                CharmapMode::Replace => Charmap::Custom(map),
                CharmapMode::Extend => Charmap::Extended(map),
            };
        }
        if let Some(multicharmap) = self.multicharmap {
            base.multicharmap = multicharmap;
        }
        if let Some(limit) = self.limit {
            base.limit = Some(NonZeroUsize::new(limit).ok_or(ConfigError::ZeroLimit)?);
        }
        debug!(
            replacement = %base.replacement,
            lower = base.lower,
            symbols = base.symbols,
            multichars = base.multicharmap.len(),
            limit = base.limit.map(NonZeroUsize::get),
            "slug config applied"
        );
        Ok(base)
    }
}
