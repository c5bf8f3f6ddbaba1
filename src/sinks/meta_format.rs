//! Metadata header rendering
//!
//! Prepends one `Formatted` entry rendering timestamp, thread id, priority and
//! prefix, e.g. `2025-01-08 10:30:45.123 <1f3a> warning [root.db] -- `.
//! Metadata itself is left untouched.
//!
//! Place this sink downstream of [`TemplateSink`](super::TemplateSink): the
//! template evaluator looks for the template in the first sequence slot.

use crate::core::{keys, Message, Result, SharedSink, Sink, TypedValue};

pub struct MetaFormatSink {
    inner: SharedSink,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl MetaFormatSink {
    pub fn new(inner: SharedSink) -> Self {
        Self {
            inner,
            use_colors: false,
        }
    }

    /// Color the priority column (requires the `console` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn format_priority(&self, priority: &str) -> String {
        let padded = format!("{:>8}", priority);

        #[cfg(feature = "console")]
        if self.use_colors {
            use colored::Colorize;
            if let Ok(p) = priority.parse::<crate::core::Priority>() {
                return padded.color(p.color_code()).to_string();
            }
        }

        padded
    }

    fn format_header(&self, message: &Message) -> String {
        let timestamp = message.meta(keys::TIME_STAMP).unwrap_or_default();
        let thread_id = message.meta(keys::THREAD_ID).unwrap_or_default();
        let priority = self.format_priority(message.meta(keys::PRIORITY).unwrap_or_default());

        match message.meta(keys::PREFIX) {
            Some(prefix) => format!("{} <{}> {} [{}] -- ", timestamp, thread_id, priority, prefix),
            None => format!("{} <{}> {} -- ", timestamp, thread_id, priority),
        }
    }
}

impl Sink for MetaFormatSink {
    fn take(&self, mut message: Message) {
        let header = self.format_header(&message);
        message.sequence.insert(0, TypedValue::formatted(header));
        self.inner.take(message);
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}
