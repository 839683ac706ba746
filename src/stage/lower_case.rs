use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Full Unicode lower-casing, enabled by `SlugOptions::lower`.
pub struct LowerCase;

#[inline(always)]
fn changes_on_lower(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.options.lower && text.chars().any(changes_on_lower)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.to_lowercase())
    }
}
