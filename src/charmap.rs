pub mod data;

use std::collections::HashMap;

use data::CHARMAP;

/// Single-character transliteration table.
///
/// A lookup returns the replacement for exactly one scalar value. Multi-char
/// sequences belong in a [`MulticharMap`](crate::options::MulticharMap).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Charmap {
    /// The table compiled into the crate.
    #[default]
    Bundled,
    /// Caller entries first, then the bundled table.
    Extended(HashMap<char, String>),
    /// Only the caller's entries; the bundled table is not consulted.
    Custom(HashMap<char, String>),
}

impl Charmap {
    #[inline]
    pub fn bundled() -> Self {
        Self::Bundled
    }

    pub fn extended<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<char>,
        V: Into<String>,
    {
        Self::Extended(collect(entries))
    }

    pub fn custom<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<char>,
        V: Into<String>,
    {
        Self::Custom(collect(entries))
    }

    /// Replacement for `c`, if the table has one.
    #[inline]
    pub fn get(&self, c: char) -> Option<&str> {
        match self {
            Self::Bundled => CHARMAP.get(&c).copied(),
            Self::Extended(overrides) => overrides
                .get(&c)
                .map(String::as_str)
                .or_else(|| CHARMAP.get(&c).copied()),
            Self::Custom(map) => map.get(&c).map(String::as_str),
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Bundled => CHARMAP.len(),
            Self::Extended(overrides) => {
                CHARMAP.len() + overrides.keys().filter(|c| !CHARMAP.contains_key(*c)).count()
            }
            Self::Custom(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collect<I, K, V>(entries: I) -> HashMap<char, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<char>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
