use crate::{context::Context, stage::Stage, unicode::is_separator};
use std::borrow::Cow;

/// Replace every maximal run of hyphens and/or whitespace with the delimiter.
///
/// | Input        | Delimiter | Output      |
/// |--------------|-----------|-------------|
/// | `foo  bar`   | `-`       | `foo-bar`   |
/// | `foo - bar`  | `_`       | `foo_bar`   |
/// | `foo-bar`    | `-`       | `foo-bar` (zero-copy) |
/// | `foo\tbar`   | `""`      | `foobar`    |
/// | `- _foo`     | `_`       | `_foo`      |
///
/// A run at the very start is dropped rather than replaced, so the slug never
/// opens with a delimiter that came from a separator. A run that already
/// equals the delimiter is left alone, so clean slugs pass through without
/// allocating.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapseSeparators;

impl CollapseSeparators {
    /// Iterate the byte ranges of separator runs.
    #[inline]
    fn runs(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut chars = text.char_indices().peekable();
        std::iter::from_fn(move || {
            let (start, _) = chars.find(|&(_, c)| is_separator(c))?;
            let mut end = text.len();
            while let Some(&(i, c)) = chars.peek() {
                if !is_separator(c) {
                    end = i;
                    break;
                }
                chars.next();
            }
            Some((start, end))
        })
    }
}

impl Stage for CollapseSeparators {
    fn name(&self) -> &'static str {
        "collapse_separators"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        let delimiter = ctx.delimiter();
        Self::runs(text).any(|(start, end)| start == 0 || &text[start..end] != delimiter)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let delimiter = ctx.delimiter();
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (start, end) in Self::runs(&text) {
            out.push_str(&text[last..start]);
            if start > 0 {
                out.push_str(delimiter);
            }
            last = end;
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SlugOptions;

    fn with_delimiter(d: &str) -> SlugOptions {
        SlugOptions {
            replacement: d.to_string(),
            ..SlugOptions::default()
        }
    }

    fn collapse(input: &str, d: &str) -> String {
        let o = with_delimiter(d);
        let ctx = Context::new(&o);
        CollapseSeparators
            .apply(Cow::Borrowed(input), &ctx)
            .into_owned()
    }

    #[test]
    fn collapses_mixed_runs() {
        assert_eq!(collapse("foo  bar", "-"), "foo-bar");
        assert_eq!(collapse("foo - bar", "-"), "foo-bar");
        assert_eq!(collapse("foo\t\n-bar", "-"), "foo-bar");
        assert_eq!(collapse("foo\u{3000}bar", "-"), "foo-bar");
    }

    #[test]
    fn custom_delimiters() {
        assert_eq!(collapse("foo bar baz", "_"), "foo_bar_baz");
        assert_eq!(collapse("foo bar baz", ""), "foobarbaz");
        assert_eq!(collapse("foo - bar", "--"), "foo--bar");
        assert_eq!(collapse("foo-bar", "_"), "foo_bar");
    }

    #[test]
    fn runs_at_edges() {
        assert_eq!(collapse("-foo-", "-"), "foo-");
        assert_eq!(collapse(" - foo", "_"), "foo");
        assert_eq!(collapse("foo   ", "."), "foo.");
        assert_eq!(collapse("-", "-"), "");
    }

    #[test]
    fn leading_delimiter_char_is_not_a_separator() {
        assert_eq!(collapse("_private name", "_"), "_private_name");
        assert_eq!(collapse("- _private", "_"), "_private");
        let o = with_delimiter("_");
        let ctx = Context::new(&o);
        assert!(!CollapseSeparators.needs_apply("_private_name", &ctx));
    }

    #[test]
    fn zero_copy_on_clean_slug() {
        let o = with_delimiter("-");
        let ctx = Context::new(&o);
        let input = "foo-bar-baz";
        assert!(!CollapseSeparators.needs_apply(input, &ctx));
        let out = CollapseSeparators.apply(Cow::Borrowed(input), &ctx);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn single_space_needs_apply_for_hyphen_delimiter() {
        let o = with_delimiter("-");
        let ctx = Context::new(&o);
        assert!(CollapseSeparators.needs_apply("foo bar", &ctx));
        assert!(CollapseSeparators.needs_apply("foo--bar", &ctx));
    }
}
