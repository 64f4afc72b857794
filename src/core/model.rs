//! Unified Result Model
//!
//! All commands map their output to this model before rendering.

use serde::{Deserialize, Serialize};

use crate::codec::call::CallError;
use crate::codec::ShortCode;

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Code,
    Error,
}

/// Error information for a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemError {
    pub code: String,
    pub message: String,
}

impl ItemError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&CallError> for ItemError {
    fn from(err: &CallError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Input integer, when one was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,

    /// The short code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Full short URL (only with --base-url)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// 1-indexed input line (batch only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// Errors (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ItemError>,
}

impl ResultItem {
    /// Create a new code result
    pub fn code(value: u64, code: ShortCode) -> Self {
        Self {
            kind: Kind::Code,
            value: Some(value),
            code: Some(code.into_string()),
            url: None,
            line: None,
            errors: Vec::new(),
        }
    }

    /// Create a new error result
    pub fn error(error: ItemError) -> Self {
        Self {
            kind: Kind::Error,
            value: None,
            code: None,
            url: None,
            line: None,
            errors: vec![error],
        }
    }

    /// Set the joined short URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the input line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the input value
    pub fn with_value(mut self, value: u64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of error items
    pub fn error_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.kind == Kind::Error)
            .count()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
