// src/context.rs
// Per-call snapshot handed to every stage. Built once per slug call and
// dropped when the call returns.

use crate::options::SlugOptions;
use smallvec::SmallVec;

/// Runtime context passed to every slug stage.
///
/// Contains:
/// - `options`: the caller's configuration, borrowed for the call
/// - `key_lengths`: distinct multichar key lengths in chars, longest first
#[derive(Debug, Clone)]
pub struct Context<'o> {
    pub options: &'o SlugOptions,
    pub key_lengths: SmallVec<[usize; 4]>,
}

impl<'o> Context<'o> {
    pub fn new(options: &'o SlugOptions) -> Self {
        let mut key_lengths: SmallVec<[usize; 4]> = options
            .multicharmap
            .keys()
            .map(|k| k.chars().count())
            .filter(|&len| len > 0)
            .collect();
        key_lengths.sort_unstable_by(|a, b| b.cmp(a));
        key_lengths.dedup();
        Self {
            options,
            key_lengths,
        }
    }

    #[inline(always)]
    pub fn delimiter(&self) -> &'o str {
        &self.options.replacement
    }

    #[inline(always)]
    pub fn has_multichars(&self) -> bool {
        !self.key_lengths.is_empty()
    }
}
