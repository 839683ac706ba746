//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete type of
//! every stage, so the whole slug chain inlines into one call with no
//! dynamic dispatch.
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;
use tracing::trace;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let current = self.previous.process(text, ctx);
        if !self.stage.needs_apply(&current, ctx) {
            return current;
        }
        let out = self.stage.apply(current, ctx);
        trace!(stage = self.stage.name(), len = out.len(), "stage applied");
        out
    }
}

/// Append `stage` after `previous`.
#[inline(always)]
pub const fn chain<S: Stage, P: Process>(previous: P, stage: S) -> ChainedProcess<S, P> {
    ChainedProcess { stage, previous }
}
