//! Message structure

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved metadata keys and type tags
pub mod keys {
    pub const TIME_STAMP: &str = "TimeStamp";
    pub const THREAD_ID: &str = "ThreadId";
    pub const PRIORITY: &str = "Priority";
    pub const PREFIX: &str = "Prefix";

    /// Type tag of a template carried as the first sequence entry
    pub const TEMPLATE: &str = "Template";
    /// Type tag of text already rendered by a sink
    pub const FORMATTED: &str = "Formatted";
}

/// One positional argument after stringification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedValue {
    pub type_tag: String,
    pub value: String,
}

impl TypedValue {
    pub fn new(type_tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            value: value.into(),
        }
    }

    pub fn formatted(value: impl Into<String>) -> Self {
        Self::new(keys::FORMATTED, value)
    }
}

impl AsRef<str> for TypedValue {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// In-flight representation of one logging call
///
/// `sequence` keeps the call's positional values in argument order; template
/// placeholders index into it. `meta` holds side-channel tags, last writer
/// wins. Cloning is deep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub meta: HashMap<String, String>,
    pub sequence: Vec<TypedValue>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// Set a metadata entry, replacing any previous value for `key`
    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.meta.insert(key.into(), value.into());
    }

    pub fn push(&mut self, value: TypedValue) {
        self.sequence.push(value);
    }

    /// True if the first sequence entry is an unevaluated template
    pub fn has_template(&self) -> bool {
        self.sequence
            .first()
            .is_some_and(|v| v.type_tag == keys::TEMPLATE)
    }

    /// Sequence values concatenated in order
    pub fn text(&self) -> String {
        self.sequence.iter().map(|v| v.value.as_str()).collect()
    }
}
