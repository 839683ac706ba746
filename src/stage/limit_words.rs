use crate::{context::Context, stage::Stage};
use memchr::memchr_iter;
use std::borrow::Cow;

/// Keep the first `limit` space-separated words.
///
/// Only literal U+0020 spaces separate words here; the stage runs before the
/// delimiter is substituted. Keeping the first N segments of a split on `' '`
/// is the prefix before the N-th space, so a borrowed input stays borrowed.
pub struct LimitWords;

impl LimitWords {
    #[inline(always)]
    fn cut_at(text: &str, ctx: &Context) -> Option<usize> {
        let limit = ctx.options.limit?.get();
        memchr_iter(b' ', text.as_bytes()).nth(limit - 1)
    }
}

impl Stage for LimitWords {
    fn name(&self) -> &'static str {
        "limit_words"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        Self::cut_at(text, ctx).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let Some(cut) = Self::cut_at(&text, ctx) else {
            return text;
        };
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(&s[..cut]),
            Cow::Owned(mut s) => {
                s.truncate(cut);
                Cow::Owned(s)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SlugOptions;
    use std::num::NonZeroUsize;

    fn limited(n: usize) -> SlugOptions {
        SlugOptions {
            limit: NonZeroUsize::new(n),
            ..SlugOptions::default()
        }
    }

    #[test]
    fn keeps_first_words() {
        let o = limited(5);
        let ctx = Context::new(&o);
        let input = "Its Your Journey We Guide You Through.";
        assert!(LimitWords.needs_apply(input, &ctx));
        let out = LimitWords.apply(Cow::Borrowed(input), &ctx);
        assert_eq!(out, "Its Your Journey We Guide");
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn short_input_untouched() {
        let o = limited(3);
        let ctx = Context::new(&o);
        assert!(!LimitWords.needs_apply("one two three", &ctx));
        assert_eq!(LimitWords.apply(Cow::Borrowed("one two"), &ctx), "one two");
    }

    #[test]
    fn empty_segments_count_as_words() {
        let o = limited(2);
        let ctx = Context::new(&o);
        // split(' ') of "a  b c" is ["a", "", "b", "c"].
        let out = LimitWords.apply(Cow::Owned("a  b c".to_string()), &ctx);
        assert_eq!(out, "a ");
    }

    #[test]
    fn only_literal_spaces_split() {
        let o = limited(1);
        let ctx = Context::new(&o);
        assert_eq!(LimitWords.apply(Cow::Borrowed("a\tb c"), &ctx), "a\tb");
    }

    #[test]
    fn no_limit_is_noop() {
        let o = SlugOptions::default();
        let ctx = Context::new(&o);
        assert!(!LimitWords.needs_apply("a b c d e f", &ctx));
    }
}
