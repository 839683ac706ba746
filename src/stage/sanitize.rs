//! stage/sanitize.rs – **Allowed-class filter + caller removal pattern**
//!
//! Applied to every resolved chunk in turn. The allowed class always runs
//! first; the removal pattern then sees only what survived and may delete
//! more (dots, for example).
use crate::{context::Context, unicode::is_slug_char};

/// Reusable per-call sanitizer. Holds a scratch buffer so chunks that need
/// the removal pattern do not allocate once the buffer has grown.
#[derive(Debug, Default)]
pub struct Sanitizer {
    scratch: String,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the sanitized form of `chunk` to `out`.
    pub fn push_str(&mut self, out: &mut String, chunk: &str, ctx: &Context) {
        match &ctx.options.remove {
            None => out.extend(chunk.chars().filter(|&c| is_slug_char(c))),
            Some(remove) => {
                self.scratch.clear();
                self.scratch
                    .extend(chunk.chars().filter(|&c| is_slug_char(c)));
                if self.scratch.is_empty() {
                    return;
                }
                out.push_str(&remove.replace_all(&self.scratch, ""));
            }
        }
    }

    /// Append `c` to `out` if it survives sanitizing.
    #[inline]
    pub fn push_char(&mut self, out: &mut String, c: char, ctx: &Context) {
        if !is_slug_char(c) {
            return;
        }
        match &ctx.options.remove {
            None => out.push(c),
            Some(remove) => {
                let mut buf = [0u8; 4];
                let s = c.encode_utf8(&mut buf);
                if !remove.is_match(s) {
                    out.push(c);
                } else {
                    out.push_str(&remove.replace_all(s, ""));
                }
            }
        }
    }
}

/// Would sanitizing change this single character?
#[inline]
pub fn changes_char(c: char, ctx: &Context) -> bool {
    if !is_slug_char(c) {
        return true;
    }
    match &ctx.options.remove {
        None => false,
        Some(remove) => {
            let mut buf = [0u8; 4];
            remove.is_match(c.encode_utf8(&mut buf))
        }
    }
}
