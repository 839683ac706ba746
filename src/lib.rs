//! URL-safe slugs from arbitrary text.
//!
//! ```
//! assert_eq!(slugger::slug("Straße nach Łódź ☢"), "strasse-nach-lodz-radioactive");
//! ```
pub mod charmap;
pub mod context;
pub mod options;
pub mod process;
pub mod slugger;
pub mod stage;
pub mod symbols;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use charmap::Charmap;
pub use options::{CharmapMode, ConfigError, MulticharMap, SlugConfig, SlugOptions};
pub use slugger::{SlugError, Slugger, SluggerBuilder};

use std::sync::LazyLock;

static DEFAULT: LazyLock<Slugger> = LazyLock::new(Slugger::default);

/// Slug `input` with the default options.
pub fn slug(input: &str) -> String {
    DEFAULT.slug(input).into_owned()
}

/// Slug `input` with explicit options.
pub fn slug_with(input: &str, options: &SlugOptions) -> String {
    slugger::run(input, options).into_owned()
}

/// Slug a dynamically typed value; non-strings fail with
/// [`SlugError::InvalidArgument`].
pub fn slug_value(input: &serde_json::Value, options: &SlugOptions) -> Result<String, SlugError> {
    slugger::run_value(input, options)
}
