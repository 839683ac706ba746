//! Core slug stage abstraction.
//!
//! A slug is produced by threading a `Cow<str>` through a fixed chain of
//! stages. Every stage has a cheap `needs_apply` pre-check; when it returns
//! `false` the text is passed on untouched, so an input that is already a
//! clean slug travels the whole chain without a single allocation.
//!
//! Per-character work (multichar matching, table and symbol resolution,
//! sanitizing) happens inside [`resolve::Resolve`]. The remaining stages
//! operate on the whole assembled string.

pub mod collapse_separators;
pub mod limit_words;
pub mod lower_case;
pub mod multichar;
pub mod resolve;
pub mod sanitize;
pub mod strip_delimiter;
pub mod trim;

use crate::context::Context;
use std::borrow::Cow;

/// A single slug step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and test messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must be correct even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}
