//! Debug dump sink

use super::stream::{GlobalStream, StreamTarget};
use crate::core::{Message, Result, Sink};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Dumps every metadata pair, then every sequence pair, as `{key, value} `
///
/// Metadata is printed sorted by key. Writes to stderr unless given another
/// target.
pub struct DebugSink {
    target: StreamTarget,
}

impl DebugSink {
    pub fn new() -> Self {
        Self::with_target(GlobalStream::Stderr.into())
    }

    pub fn with_target(target: StreamTarget) -> Self {
        Self { target }
    }

    pub fn render(message: &Message) -> String {
        let mut out = String::new();
        let sorted: BTreeMap<_, _> = message.meta.iter().collect();
        for (key, value) in sorted {
            let _ = write!(out, "{{{}, {}}} ", key, value);
        }
        for value in &message.sequence {
            let _ = write!(out, "{{{}, {}}} ", value.type_tag, value.value);
        }
        out.push('\n');
        out
    }
}

impl Default for DebugSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for DebugSink {
    fn take(&self, message: Message) {
        self.target.write_or_report(&Self::render(&message), "debug");
    }

    fn flush(&self) -> Result<()> {
        self.target.flush()?;
        Ok(())
    }
}
