//! Priority tagging decorator

use crate::core::{keys, Loggable, Message, Priority, Result, SharedSink, Sink};

/// Sets `Priority` metadata on every message before forwarding it
pub struct PrioritySink {
    inner: SharedSink,
    priority: Priority,
}

impl PrioritySink {
    pub fn new(inner: SharedSink, priority: Priority) -> Self {
        Self { inner, priority }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

impl Sink for PrioritySink {
    fn take(&self, mut message: Message) {
        message.set_meta(keys::PRIORITY, self.priority.stringify());
        self.inner.take(message);
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}
