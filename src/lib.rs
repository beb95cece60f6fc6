//! Match evaluation for autocomplete inputs.
//!
//! A [`Matcher`] compiles the typed search once; the resulting [`CompiledMatcher`]
//! decides for every candidate whether it matches and which parts of it to highlight.
//! The [`Completer`] applies a matcher to a list of [`Item`]s and produces the
//! [`ResultListItem`]s a renderer displays.

pub use completer::Completer;
pub use config::{Config, MatcherKind, Ranking};
pub use error::{Error, Result};
pub use highlight::Highlight;
pub use item::{Item, ResultListItem};
pub use matchers::*;
pub use providers::*;

mod completer;
mod config;
mod error;
mod highlight;
mod item;
mod matchers;
mod providers;
