use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A matcher reported a range that is inverted or exceeds the candidate text.
    #[error("invalid highlight {start}..{end} for text of length {len}")]
    InvalidHighlight { start: usize, end: usize, len: usize },

    /// A matcher reported a range that splits a UTF-8 character.
    #[error("highlight offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },

    #[error("unknown matcher: {0}")]
    UnknownMatcher(String),

    #[error("unknown ranking: {0}")]
    UnknownRanking(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
