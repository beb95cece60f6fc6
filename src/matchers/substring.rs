use crate::{CompiledMatcher, MatchResult, Matcher};

use super::{fold, Folded};

/// Case-insensitive substring matching, highlighting the first occurrence.
///
/// An empty search matches everything without highlights.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn compile(&self, search: &str) -> Box<dyn CompiledMatcher> {
        Box::new(SubstringSearch::new(search))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringSearch {
    needle: String,
}

impl SubstringSearch {
    pub fn new(search: &str) -> Self {
        Self { needle: fold(search.trim()) }
    }

    /// The normalized search string.
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl CompiledMatcher for SubstringSearch {
    fn evaluate(&self, text: &str) -> MatchResult {
        if self.needle.is_empty() {
            return MatchResult::matched(Vec::new());
        }

        match Folded::new(text).find(&self.needle) {
            Some(hl) => MatchResult::matched(vec![hl]),
            None => MatchResult::no_match(),
        }
    }
}
