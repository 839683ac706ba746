//! stage/multichar.rs – **Longest-match multi-character substitution**
//! * Tries every configured key length at the current position, longest first
//! * A key mapped to `""` still matches and deletes the sequence
//! * Lengths are counted in scalar values, never bytes
use crate::context::Context;

/// Match a configured key at the start of `rest`.
///
/// Returns the replacement and the number of **bytes** consumed.
#[inline]
pub fn match_at<'o>(rest: &str, ctx: &Context<'o>) -> Option<(&'o str, usize)> {
    let map = &ctx.options.multicharmap;
    for &len in &ctx.key_lengths {
        let Some(end) = char_boundary(rest, len) else {
            continue;
        };
        if let Some(replacement) = map.get(&rest[..end]) {
            return Some((replacement.as_str(), end));
        }
    }
    None
}

/// Could any configured key occur somewhere in `text`?
#[inline]
pub fn contains_key(text: &str, ctx: &Context) -> bool {
    ctx.has_multichars()
        && ctx
            .options
            .multicharmap
            .keys()
            .any(|k| !k.is_empty() && text.contains(k.as_str()))
}

/// Byte offset just past the first `n` chars, `None` if `text` is shorter.
#[inline(always)]
fn char_boundary(text: &str, n: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{MulticharMap, SlugOptions};

    fn options(pairs: &[(&str, &str)]) -> SlugOptions {
        let multicharmap: MulticharMap = pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SlugOptions {
            multicharmap,
            ..SlugOptions::default()
        }
    }

    #[test]
    fn matches_at_start_only() {
        let o = options(&[("<3", "love")]);
        let ctx = Context::new(&o);
        assert_eq!(match_at("<3 you", &ctx), Some(("love", 2)));
        assert_eq!(match_at("i <3", &ctx), None);
    }

    #[test]
    fn longest_key_wins() {
        let o = options(&[("ab", "short"), ("abc", "long")]);
        let ctx = Context::new(&o);
        assert_eq!(match_at("abcd", &ctx), Some(("long", 3)));
        assert_eq!(match_at("abd", &ctx), Some(("short", 2)));
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let o = options(&[("äö", "aeoe")]);
        let ctx = Context::new(&o);
        assert_eq!(match_at("äöx", &ctx), Some(("aeoe", 4)));
        assert_eq!(match_at("ä", &ctx), None);
    }

    #[test]
    fn empty_replacement_still_matches() {
        let o = options(&[("--", "")]);
        let ctx = Context::new(&o);
        assert_eq!(match_at("--x", &ctx), Some(("", 2)));
    }

    #[test]
    fn contains_key_scans_whole_text() {
        let o = options(&[("&&", "and")]);
        let ctx = Context::new(&o);
        assert!(contains_key("a && b", &ctx));
        assert!(!contains_key("a & b", &ctx));

        let none = SlugOptions::default();
        assert!(!contains_key("a && b", &Context::new(&none)));
    }
}
