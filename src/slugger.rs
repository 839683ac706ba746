use thiserror::Error;
use tracing::trace;

use crate::{
    charmap::Charmap,
    context::Context,
    options::{ConfigError, MulticharMap, SlugOptions},
    process::{ChainedProcess, EmptyProcess, Process, chain},
    stage::{
        collapse_separators::CollapseSeparators, limit_words::LimitWords, lower_case::LowerCase,
        resolve::Resolve, strip_delimiter::StripDelimiter, trim::Trim,
    },
};
use regex::Regex;
use serde_json::Value;
use std::{borrow::Cow, num::NonZeroUsize};

#[derive(Debug, Error)]
pub enum SlugError {
    #[error("input must be a string, got {0}")]
    InvalidArgument(&'static str),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

type SlugProcess = ChainedProcess<
    LowerCase,
    ChainedProcess<
        StripDelimiter,
        ChainedProcess<
            CollapseSeparators,
            ChainedProcess<Trim, ChainedProcess<LimitWords, ChainedProcess<Resolve, EmptyProcess>>>,
        >,
    >,
>;

/// Resolve every position, then assemble: limit, trim, collapse, strip, lower.
const SLUG_PROCESS: SlugProcess = chain(
    chain(
        chain(
            chain(chain(chain(EmptyProcess, Resolve), LimitWords), Trim),
            CollapseSeparators,
        ),
        StripDelimiter,
    ),
    LowerCase,
);

/// Reusable slug generator. Cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Slugger {
    options: SlugOptions,
}

impl Slugger {
    pub fn builder() -> SluggerBuilder {
        SluggerBuilder::default()
    }

    pub fn new(options: SlugOptions) -> Self {
        Self { options }
    }

    /// Build from a JSON [`SlugConfig`](crate::options::SlugConfig) applied over the defaults.
    pub fn from_json(json: &str) -> Result<Self, SlugError> {
        Ok(Self::new(SlugOptions::from_json(json)?))
    }

    pub fn options(&self) -> &SlugOptions {
        &self.options
    }

    /// Slug `input`. Borrows the input when it is already a slug.
    pub fn slug<'a>(&self, input: &'a str) -> Cow<'a, str> {
        run(input, &self.options)
    }

    /// Slug a dynamically typed value. Anything but a JSON string is rejected.
    pub fn slug_value(&self, input: &Value) -> Result<String, SlugError> {
        run_value(input, &self.options)
    }
}

pub(crate) fn run<'a>(input: &'a str, options: &SlugOptions) -> Cow<'a, str> {
    let ctx = Context::new(options);
    let out = SLUG_PROCESS.process(Cow::Borrowed(input), &ctx);
    trace!(
        input_len = input.len(),
        output_len = out.len(),
        borrowed = matches!(out, Cow::Borrowed(_)),
        "slugged"
    );
    out
}

pub(crate) fn run_value(input: &Value, options: &SlugOptions) -> Result<String, SlugError> {
    match input {
        Value::String(s) => Ok(run(s, options).into_owned()),
        other => Err(SlugError::InvalidArgument(kind(other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Default)]
pub struct SluggerBuilder {
    options: SlugOptions,
}

impl SluggerBuilder {
    /// Start from an existing option set instead of the defaults.
    pub fn options(mut self, options: SlugOptions) -> Self {
        self.options = options;
        self
    }

    pub fn replacement(mut self, replacement: impl Into<String>) -> Self {
        self.options.replacement = replacement.into();
        self
    }

    pub fn lower(mut self, lower: bool) -> Self {
        self.options.lower = lower;
        self
    }

    pub fn symbols(mut self, symbols: bool) -> Self {
        self.options.symbols = symbols;
        self
    }

    pub fn remove(mut self, pattern: Regex) -> Self {
        self.options.remove = Some(pattern);
        self
    }

    pub fn charmap(mut self, charmap: Charmap) -> Self {
        self.options.charmap = charmap;
        self
    }

    pub fn multichar(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.options.multicharmap.insert(from.into(), to.into());
        self
    }

    pub fn multicharmap(mut self, multicharmap: MulticharMap) -> Self {
        self.options.multicharmap = multicharmap;
        self
    }

    /// Keep at most `limit` words; `0` means unlimited.
    pub fn limit(mut self, limit: usize) -> Self {
        self.options.limit = NonZeroUsize::new(limit);
        self
    }

    pub fn build(self) -> Slugger {
        Slugger {
            options: self.options,
        }
    }
}
