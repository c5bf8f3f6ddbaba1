//! Hierarchical prefix tagging
//!
//! [`PrefixSink`] sets `Prefix` metadata. Child sinks share the same
//! downstream chain and extend the prefix with `.name`, so
//! `root.child("a").child("b")` tags messages `root.a.b`.

use crate::core::{keys, LogArgs, LogStream, Logger, Message, Result, SharedSink, Sink, Template};
use std::sync::Arc;

pub struct PrefixSink {
    inner: SharedSink,
    prefix: String,
}

impl PrefixSink {
    pub fn new(inner: SharedSink, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// New sink forwarding to the same downstream chain under `prefix.name`
    #[must_use]
    pub fn child(&self, name: &str) -> PrefixSink {
        PrefixSink::new(Arc::clone(&self.inner), format!("{}.{}", self.prefix, name))
    }
}

impl Sink for PrefixSink {
    fn take(&self, mut message: Message) {
        message.set_meta(keys::PREFIX, self.prefix.as_str());
        self.inner.take(message);
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}

/// Logger whose messages carry a dotted prefix, starting at `root`
///
/// # Examples
///
/// ```
/// use rust_pipeline_logger::prelude::*;
///
/// let root = PrefixedLogger::new(SinkBuilder::null().build());
/// let child = root.child("child");
/// assert_eq!(child.prefix(), "root.child");
/// child.log(("ohai!",));
/// ```
#[derive(Clone)]
pub struct PrefixedLogger {
    logger: Logger,
    prefix_sink: Arc<PrefixSink>,
}

impl PrefixedLogger {
    pub const ROOT: &'static str = "root";

    pub fn new(sink: SharedSink) -> Self {
        Self::from_prefix_sink(PrefixSink::new(sink, Self::ROOT))
    }

    fn from_prefix_sink(prefix_sink: PrefixSink) -> Self {
        let prefix_sink = Arc::new(prefix_sink);
        Self {
            logger: Logger::new(prefix_sink.clone()),
            prefix_sink,
        }
    }

    #[must_use]
    pub fn child(&self, name: &str) -> PrefixedLogger {
        Self::from_prefix_sink(self.prefix_sink.child(name))
    }

    pub fn prefix(&self) -> &str {
        self.prefix_sink.prefix()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn log<A: LogArgs>(&self, args: A) {
        self.logger.log(args);
    }

    pub fn log_template<A: LogArgs>(&self, template: &Template, args: A) {
        self.logger.log_template(template, args);
    }

    pub fn stream(&self) -> LogStream<'_> {
        self.logger.stream()
    }

    pub fn submit(&self, message: Message) {
        self.logger.submit(message);
    }
}
