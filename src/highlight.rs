use std::ops::Range;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A half-open byte range `[start, end)` of a candidate text that should be emphasized.
///
/// Serialized as a `[start, end]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "[usize; 2]", try_from = "[usize; 2]")]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
}

impl Highlight {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Checks that the range is ordered, lies within `text` and does not split a character.
    pub fn validate(&self, text: &str) -> Result<()> {
        if self.start > self.end || self.end > text.len() {
            return Err(Error::InvalidHighlight {
                start: self.start,
                end: self.end,
                len: text.len(),
            });
        }

        for offset in [self.start, self.end] {
            if !text.is_char_boundary(offset) {
                return Err(Error::NotCharBoundary { offset });
            }
        }

        Ok(())
    }

    /// Sorts the ranges, drops empty ones and merges ranges that overlap or touch.
    pub fn normalize(highlights: impl IntoIterator<Item=Highlight>) -> Vec<Highlight> {
        highlights.into_iter()
            .filter(|hl| !hl.is_empty())
            .sorted()
            .coalesce(|prev, next| {
                if next.start <= prev.end {
                    Ok(Highlight::new(prev.start, prev.end.max(next.end)))
                } else {
                    Err((prev, next))
                }
            })
            .collect()
    }

    /// Renders `text` with every highlighted part wrapped in `open` and `close`.
    ///
    /// Ranges that are empty, invalid for `text` or that start before the end of the
    /// previous marked range are skipped.
    pub fn mark(text: &str, highlights: &[Highlight], open: &str, close: &str) -> String {
        let mut marked = String::with_capacity(text.len() + highlights.len() * (open.len() + close.len()));
        let mut pos = 0;

        for hl in highlights {
            if hl.is_empty() || hl.start < pos || hl.validate(text).is_err() {
                continue;
            }

            marked.push_str(&text[pos..hl.start]);
            marked.push_str(open);
            marked.push_str(&text[hl.range()]);
            marked.push_str(close);
            pos = hl.end;
        }

        marked.push_str(&text[pos..]);
        marked
    }
}

impl From<Range<usize>> for Highlight {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Highlight> for [usize; 2] {
    fn from(hl: Highlight) -> Self {
        [hl.start, hl.end]
    }
}

impl TryFrom<[usize; 2]> for Highlight {
    type Error = String;

    fn try_from([start, end]: [usize; 2]) -> std::result::Result<Self, Self::Error> {
        if start > end {
            return Err(format!("highlight start {start} is after end {end}"));
        }

        Ok(Self::new(start, end))
    }
}
