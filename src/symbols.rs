//! Process-wide "Symbol, other" name table.
//!
//! Built once on first use from the Unicode name data, then shared read-only.
//! Names are stored already cleaned: lower-cased, noise words removed, trimmed.
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Instant;

use tracing::debug;

use crate::unicode::is_other_symbol;

/// Words dropped from symbol names, removed in this order.
pub const NOISE_WORDS: [&str; 8] = [
    "sign", "cross", "of", "symbol", "staff", "hand", "black", "white",
];

static TABLE: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::load);

/// Shared table accessor. The first caller pays for the load.
#[inline]
pub fn table() -> &'static SymbolTable {
    &TABLE
}

#[derive(Debug)]
pub struct SymbolTable {
    names: HashMap<char, Box<str>>,
}

impl SymbolTable {
    fn load() -> Self {
        let started = Instant::now();
        let names: HashMap<char, Box<str>> = (0..=char::MAX as u32)
            .filter_map(char::from_u32)
            .filter(|&c| is_other_symbol(c))
            .filter_map(|c| unicode_names2::name(c).map(|n| (c, clean_name(&n.to_string()))))
            .collect();
        debug!(
            entries = names.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "symbol table loaded"
        );
        Self { names }
    }

    /// Cleaned name for an `So` character.
    #[inline]
    pub fn name(&self, c: char) -> Option<&str> {
        self.names.get(&c).map(|n| &**n)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Lower-case, drop every noise word (substring match), trim.
pub fn clean_name(name: &str) -> Box<str> {
    let mut out = name.to_lowercase();
    for word in NOISE_WORDS {
        if out.contains(word) {
            out = out.replace(word, "");
        }
    }
    out.trim().into()
}
