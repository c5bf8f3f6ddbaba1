//! Broadcast to several sinks

use crate::core::{Message, Result, SharedSink, Sink};

/// Forwards every message to each child in registration order
///
/// All children but the last receive their own deep copy; the last one gets
/// the original. A child mutating its message is never observed by another.
#[derive(Default)]
pub struct FanOutSink {
    children: Vec<SharedSink>,
}

impl FanOutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, child: SharedSink) {
        self.children.push(child);
    }

    #[must_use]
    pub fn with_child(mut self, child: SharedSink) -> Self {
        self.add(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FromIterator<SharedSink> for FanOutSink {
    fn from_iter<I: IntoIterator<Item = SharedSink>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl Sink for FanOutSink {
    fn take(&self, message: Message) {
        if let Some((last, rest)) = self.children.split_last() {
            for child in rest {
                child.take(message.clone());
            }
            last.take(message);
        }
    }

    /// Flushes every child, reporting the first failure
    fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for child in &self.children {
            if let Err(e) = child.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
