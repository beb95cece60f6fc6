use std::sync::Arc;

use fuzzy_matcher::skim::SkimMatcherV2;
use itertools::Itertools;

use crate::{CompiledMatcher, Highlight, MatchResult, Matcher};

/// Fuzzy matching on top of any [`fuzzy_matcher::FuzzyMatcher`].
///
/// Results carry the score of the underlying algorithm, highlights cover the
/// matched characters.
pub struct FuzzyMatcher<T>(Arc<T>);

impl<T> FuzzyMatcher<T> {
    pub fn new(matcher: T) -> Self {
        Self(Arc::new(matcher))
    }
}

impl FuzzyMatcher<SkimMatcherV2> {
    /// The skim algorithm, ignoring case.
    pub fn skim() -> Self {
        Self::new(SkimMatcherV2::default().ignore_case())
    }
}

impl Default for FuzzyMatcher<SkimMatcherV2> {
    fn default() -> Self {
        Self::skim()
    }
}

impl<T> Matcher for FuzzyMatcher<T>
    where T: fuzzy_matcher::FuzzyMatcher + Send + Sync + 'static,
{
    fn compile(&self, search: &str) -> Box<dyn CompiledMatcher> {
        Box::new(FuzzySearch {
            matcher: Arc::clone(&self.0),
            pattern: search.trim().to_owned(),
        })
    }
}

pub struct FuzzySearch<T> {
    matcher: Arc<T>,
    pattern: String,
}

impl<T> FuzzySearch<T> {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl<T> CompiledMatcher for FuzzySearch<T>
    where T: fuzzy_matcher::FuzzyMatcher + Send + Sync,
{
    fn evaluate(&self, text: &str) -> MatchResult {
        if self.pattern.is_empty() {
            return MatchResult::matched(Vec::new());
        }

        let Some((score, indices)) = self.matcher.fuzzy_indices(text, &self.pattern) else {
            return MatchResult::no_match();
        };

        // the algorithm reports char positions, highlights are byte ranges
        let chars = text.char_indices()
            .map(|(start, ch)| Highlight::new(start, start + ch.len_utf8()))
            .collect_vec();

        let highlights = indices.into_iter()
            .filter_map(|idx| chars.get(idx).copied());

        MatchResult::matched(Highlight::normalize(highlights)).with_score(score)
    }
}
