//! stage/resolve.rs – **Per-position transliteration (lossy)**
//! * Multichar keys first (`"<3"` → "love"), longest key wins
//! * Then the transliteration table (`€` → "euro", `Ž` → "Z")
//! * Then, when enabled, "Symbol, other" names (`☢` → "radioactive")
//! * Every resolved chunk is sanitized before it is appended
//! * Zero-cost when nothing in the input needs resolving
use crate::{
    context::Context,
    stage::{
        Stage, multichar,
        sanitize::{Sanitizer, changes_char},
    },
    symbols,
    unicode::is_other_symbol,
};
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
pub struct Resolve;

/// What one input position resolved to, before sanitizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'o> {
    /// The input character itself.
    Char(char),
    /// A replacement from the tables.
    Str(&'o str),
}

/// Resolve a character that no multichar key consumed.
///
/// A table replacement is itself eligible for symbol resolution through its
/// first character; an empty replacement never is.
#[inline]
pub fn resolve_char<'o>(c: char, ctx: &Context<'o>) -> Chunk<'o> {
    let mapped = ctx.options.charmap.get(c);
    if ctx.options.symbols {
        let effective = match mapped {
            Some(replacement) => replacement.chars().next(),
            None => Some(c),
        };
        if let Some(e) = effective
            && is_other_symbol(e)
            && let Some(name) = symbols::table().name(e)
        {
            return Chunk::Str(name);
        }
    }
    match mapped {
        Some(replacement) => Chunk::Str(replacement),
        None => Chunk::Char(c),
    }
}

impl Stage for Resolve {
    fn name(&self) -> &'static str {
        "resolve"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        if multichar::contains_key(text, ctx) {
            return true;
        }
        let symbols = ctx.options.symbols;
        text.chars().any(|c| {
            ctx.options.charmap.contains(c)
                || (symbols && is_other_symbol(c))
                || changes_char(c, ctx)
        })
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let mut out = String::with_capacity(text.len() + (text.len() >> 2));
        let mut sanitizer = Sanitizer::new();
        let mut rest: &str = &text;

        while let Some(c) = rest.chars().next() {
            if let Some((replacement, consumed)) = multichar::match_at(rest, ctx) {
                sanitizer.push_str(&mut out, replacement, ctx);
                rest = &rest[consumed..];
                continue;
            }
            match resolve_char(c, ctx) {
                Chunk::Char(c) => sanitizer.push_char(&mut out, c, ctx),
                Chunk::Str(s) => sanitizer.push_str(&mut out, s, ctx),
            }
            rest = &rest[c.len_utf8()..];
        }

        if out == *text {
            return text;
        }
        Cow::Owned(out)
    }
}
