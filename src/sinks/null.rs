//! Discarding sink

use crate::core::{Message, Sink};

/// Drops every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn take(&self, _message: Message) {}
}
