use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Drop one trailing delimiter from the collapsed slug.
///
/// Runs after [`CollapseSeparators`](super::collapse_separators::CollapseSeparators),
/// which already drops a leading separator run. The match is literal, so a
/// delimiter like `.` or `+` is never read as a pattern.
pub struct StripDelimiter;

impl StripDelimiter {
    #[inline(always)]
    fn strip<'t>(text: &'t str, delimiter: &str) -> &'t str {
        text.strip_suffix(delimiter).unwrap_or(text)
    }
}

impl Stage for StripDelimiter {
    fn name(&self) -> &'static str {
        "strip_delimiter"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        let delimiter = ctx.delimiter();
        !delimiter.is_empty() && text.ends_with(delimiter)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let delimiter = ctx.delimiter();
        if delimiter.is_empty() {
            return text;
        }
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(Self::strip(s, delimiter)),
            Cow::Owned(s) => {
                let stripped = Self::strip(&s, delimiter);
                if stripped.len() == s.len() {
                    return Cow::Owned(s);
                }
                Cow::Owned(stripped.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SlugOptions;

    fn strip(input: &str, d: &str) -> String {
        let o = SlugOptions {
            replacement: d.to_string(),
            ..SlugOptions::default()
        };
        let ctx = Context::new(&o);
        StripDelimiter.apply(Cow::Owned(input.into()), &ctx).into_owned()
    }

    #[test]
    fn strips_one_trailing() {
        assert_eq!(strip("foo-bar-", "-"), "foo-bar");
        assert_eq!(strip("foo--", "-"), "foo-");
        assert_eq!(strip("-", "-"), "");
    }

    #[test]
    fn leading_delimiter_is_kept() {
        assert_eq!(strip("_private_", "_"), "_private");
        assert_eq!(strip("-foo", "-"), "-foo");
    }

    #[test]
    fn multi_char_delimiter_is_literal() {
        assert_eq!(strip("foo.bar.", "."), "foo.bar");
        assert_eq!(strip("foo__", "__"), "foo");
        assert_eq!(strip("foo_", "__"), "foo_");
    }

    #[test]
    fn empty_delimiter_is_noop() {
        let o = SlugOptions {
            replacement: String::new(),
            ..SlugOptions::default()
        };
        let ctx = Context::new(&o);
        assert!(!StripDelimiter.needs_apply("foo", &ctx));
        assert_eq!(StripDelimiter.apply(Cow::Borrowed("foo"), &ctx), "foo");
    }
}
