use itertools::Itertools;

use crate::{CompiledMatcher, Highlight, MatchResult, Matcher};

use super::{fold, Folded};

/// Matches items that contain every whitespace separated word of the search,
/// in any order and ignoring case.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordsMatcher;

impl Matcher for WordsMatcher {
    fn compile(&self, search: &str) -> Box<dyn CompiledMatcher> {
        Box::new(WordsSearch::new(search))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsSearch {
    words: Vec<String>,
}

impl WordsSearch {
    pub fn new(search: &str) -> Self {
        let search = fold(search);

        Self {
            words: search.split_whitespace().map(str::to_owned).unique().collect_vec(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl CompiledMatcher for WordsSearch {
    fn evaluate(&self, text: &str) -> MatchResult {
        if self.words.is_empty() {
            return MatchResult::matched(Vec::new());
        }

        let folded = Folded::new(text);

        let highlights: Option<Vec<Highlight>> = self.words
            .iter()
            .map(|word| folded.find(word))
            .collect();

        match highlights {
            Some(highlights) => MatchResult::matched(Highlight::normalize(highlights)),
            None => MatchResult::no_match(),
        }
    }
}
