use serde::{Deserialize, Serialize};

use crate::Highlight;

/// A candidate entry of the autocomplete list.
///
/// In JSON an item is either a bare string or an object with a `key`
/// and an optional `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item<V = serde_json::Value> {
    Plain(String),

    KeyValue {
        /// The key by which this item can be found. It is also the text shown for the item.
        key: String,

        /// The payload of the item, carried through unchanged.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<V>,
    },
}

impl<V> Item<V> {
    pub fn plain(key: impl Into<String>) -> Self {
        Item::Plain(key.into())
    }

    pub fn with_value(key: impl Into<String>, value: V) -> Self {
        Item::KeyValue { key: key.into(), value: Some(value) }
    }

    /// The text that is presented to the matchers.
    pub fn key(&self) -> &str {
        match self {
            Item::Plain(key) => key,
            Item::KeyValue { key, .. } => key,
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Item::Plain(_) => None,
            Item::KeyValue { value, .. } => value.as_ref(),
        }
    }
}

impl<V> From<&str> for Item<V> {
    fn from(key: &str) -> Self {
        Item::Plain(key.to_owned())
    }
}

impl<V> From<String> for Item<V> {
    fn from(key: String) -> Self {
        Item::Plain(key)
    }
}

/// A matched item as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultListItem<'a, V = serde_json::Value> {
    /// Position in the result list.
    pub index: usize,
    pub key: &'a str,
    pub value: Option<&'a V>,

    /// The display text.
    pub label: &'a str,

    /// Ranges of `label` to emphasize, sorted and non-overlapping.
    pub highlights: Vec<Highlight>,
}

impl<'a, V> ResultListItem<'a, V> {
    pub(crate) fn new(index: usize, item: &'a Item<V>, highlights: Vec<Highlight>) -> Self {
        Self {
            index,
            key: item.key(),
            value: item.value(),
            label: item.key(),
            highlights,
        }
    }

    /// The label with every highlighted part wrapped in `open` and `close`.
    pub fn marked(&self, open: &str, close: &str) -> String {
        Highlight::mark(self.label, &self.highlights, open, close)
    }
}
