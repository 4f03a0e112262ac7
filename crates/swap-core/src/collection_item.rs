//! Rows of a list that may still be loading.
//!
//! A row either holds a value, stands in for one that is still being fetched,
//! or pads the list with an empty cell.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum CollectionItem<T> {
    Value(T),
    /// Loading row, identified by its position among placeholders.
    Placeholder(String),
    Empty(String),
}

impl<T> CollectionItem<T> {
    /// `count` placeholder rows indexed `"0"`, `"1"`, ...
    pub fn placeholders(count: usize) -> Vec<Self> {
        (0..count)
            .map(|i| CollectionItem::Placeholder(i.to_string()))
            .collect()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CollectionItem::Placeholder(_))
    }

    pub fn is_empty_cell(&self) -> bool {
        matches!(self, CollectionItem::Empty(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            CollectionItem::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CollectionItem<U> {
        match self {
            CollectionItem::Value(v) => CollectionItem::Value(f(v)),
            CollectionItem::Placeholder(i) => CollectionItem::Placeholder(i),
            CollectionItem::Empty(i) => CollectionItem::Empty(i),
        }
    }
}
