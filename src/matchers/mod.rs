use serde::{Deserialize, Serialize};

pub use fuzzy::{FuzzyMatcher, FuzzySearch};
pub use substring::{SubstringMatcher, SubstringSearch};
pub use words::{WordsMatcher, WordsSearch};

use crate::{Highlight, Result};

mod fuzzy;
mod substring;
mod words;

/// Outcome of evaluating a compiled search against one candidate text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the candidate matches the search.
    pub matches: bool,

    /// Parts of the candidate that should be highlighted as matching.
    /// Empty if nothing matches or no highlighting should be shown.
    pub highlights: Vec<Highlight>,

    /// Relevance of the match, higher is better. Matchers that do not rank leave this empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self::default()
    }

    pub fn matched(highlights: Vec<Highlight>) -> Self {
        Self { matches: true, highlights, score: None }
    }

    pub fn with_score(self, score: i64) -> Self {
        Self { score: Some(score), ..self }
    }

    /// Validates the highlights against `text` and brings them into normal form.
    ///
    /// Highlights of a non-matching result are dropped. Ranges that are inverted, out of
    /// bounds or that split a character are rejected.
    pub fn checked(self, text: &str) -> Result<Self> {
        if !self.matches {
            return Ok(Self { highlights: Vec::new(), ..self });
        }

        for hl in &self.highlights {
            hl.validate(text)?;
        }

        Ok(Self { highlights: Highlight::normalize(self.highlights), ..self })
    }
}

/// A search function, split in two stages: `compile` prepares the search once,
/// the compiled search is then evaluated against every candidate.
pub trait Matcher: Send + Sync {
    fn compile(&self, search: &str) -> Box<dyn CompiledMatcher>;
}

/// A prepared search. Evaluation must be pure so candidates can be evaluated
/// in any order and from multiple threads.
pub trait CompiledMatcher: Send + Sync {
    fn evaluate(&self, text: &str) -> MatchResult;
}

impl<F> CompiledMatcher for F
    where F: Fn(&str) -> MatchResult + Send + Sync,
{
    fn evaluate(&self, text: &str) -> MatchResult {
        self(text)
    }
}

/// Adapts a function `search -> compiled search` into a [`Matcher`].
pub struct FnMatcher<F>(F);

/// Wraps a closure of shape `|search| |text| MatchResult` as a [`Matcher`].
pub fn matcher_fn<F, C>(compile: F) -> FnMatcher<F>
    where F: Fn(&str) -> C + Send + Sync,
          C: CompiledMatcher + 'static,
{
    FnMatcher(compile)
}

impl<F, C> Matcher for FnMatcher<F>
    where F: Fn(&str) -> C + Send + Sync,
          C: CompiledMatcher + 'static,
{
    fn compile(&self, search: &str) -> Box<dyn CompiledMatcher> {
        Box::new((self.0)(search))
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn compile(&self, search: &str) -> Box<dyn CompiledMatcher> {
        (**self).compile(search)
    }
}

/// Lowercases a single char. The final sigma `ς` folds to `σ`, like `Σ` does.
fn fold_char(ch: char) -> impl Iterator<Item=char> {
    ch.to_lowercase().map(|lower| if lower == 'ς' { 'σ' } else { lower })
}

/// Lowercases `text` char by char, the same way [`Folded`] lowercases candidates.
///
/// `str::to_lowercase` is context sensitive (a final `Σ` becomes `ς`), so searches
/// must not use it.
fn fold(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// Lowercased copy of a text that remembers where every byte came from.
struct Folded {
    text: String,

    /// For every byte of `text` the byte range of the original character it was produced from.
    origin: Vec<(usize, usize)>,
}

impl Folded {
    fn new(original: &str) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());

        for (start, ch) in original.char_indices() {
            let end = start + ch.len_utf8();

            // lowercasing may change the byte length, e.g. 'İ' becomes "i̇"
            for lower in fold_char(ch) {
                text.push(lower);
                origin.extend(std::iter::repeat((start, end)).take(lower.len_utf8()));
            }
        }

        Self { text, origin }
    }

    /// Maps a non-empty range of the folded text to the original characters it covers.
    fn original(&self, start: usize, end: usize) -> Highlight {
        Highlight::new(self.origin[start].0, self.origin[end - 1].1)
    }

    /// Finds the first occurrence of an already lowercased needle.
    fn find(&self, needle: &str) -> Option<Highlight> {
        let start = self.text.find(needle)?;
        Some(self.original(start, start + needle.len()))
    }
}
